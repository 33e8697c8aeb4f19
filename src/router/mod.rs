//! # Sistema de Routing
//! src/router/mod.rs
//!
//! ```text
//! Request → Route::resolve → Handler → Response
//! ```
//!
//! La clave de routing es el primer segmento del path (el texto entre las
//! dos primeras `/`); el resto del path es un único parámetro que no se
//! vuelve a partir.
//!
//! | segmento     | comportamiento                                 |
//! |--------------|------------------------------------------------|
//! | (vacío)      | 200 sin headers ni body                        |
//! | `echo`       | 200 `text/plain` con el parámetro              |
//! | `user-agent` | 200 `text/plain` con el header `User-Agent`    |
//! | `files`      | lectura (GET) o escritura del archivo          |
//! | otro         | 404 sin headers ni body                        |

use crate::commands;
use crate::http::{Request, Response};
use crate::storage::{DirectoryStore, FileStore};
use std::sync::Arc;

/// Las cuatro rutas que conoce el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/`
    Root,

    /// `/echo/{texto}`
    Echo(&'a str),

    /// `/user-agent`
    UserAgent,

    /// `/files/{nombre}`
    Files(&'a str),
}

impl<'a> Route<'a> {
    /// Resuelve la ruta de un path; `None` si el segmento es desconocido o
    /// el path no empieza con `/`
    ///
    /// # Ejemplo
    /// ```
    /// use route_server::router::Route;
    ///
    /// assert_eq!(Route::resolve("/"), Some(Route::Root));
    /// assert_eq!(Route::resolve("/echo/a/b"), Some(Route::Echo("a/b")));
    /// assert_eq!(Route::resolve("/files/x.txt"), Some(Route::Files("x.txt")));
    /// assert_eq!(Route::resolve("/unknown/path"), None);
    /// ```
    pub fn resolve(path: &'a str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let (segment, param) = rest.split_once('/').unwrap_or((rest, ""));

        match segment {
            "" => Some(Route::Root),
            "echo" => Some(Route::Echo(param)),
            "user-agent" => Some(Route::UserAgent),
            "files" => Some(Route::Files(param)),
            _ => None,
        }
    }
}

/// Router con las rutas fijas y el acceso a archivos
///
/// Es una función pura de la request salvo por la lectura/escritura que
/// hace la ruta `files` a través del [`FileStore`].
pub struct Router {
    store: Arc<dyn FileStore>,
}

impl Router {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    /// Router que resuelve archivos bajo `prefix` (vacío = directorio actual)
    pub fn with_directory(prefix: &str) -> Self {
        Self::new(Arc::new(DirectoryStore::new(prefix)))
    }

    /// Produce exactamente una respuesta para la request
    ///
    /// # Ejemplo
    /// ```
    /// use route_server::router::Router;
    /// use route_server::http::{Request, StatusCode};
    ///
    /// let router = Router::with_directory("");
    ///
    /// let request = Request::parse(b"GET /echo/hola HTTP/1.1\r\n\r\n").unwrap();
    /// let response = router.route(&request);
    ///
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.body(), b"hola");
    /// ```
    pub fn route(&self, request: &Request) -> Response {
        match Route::resolve(request.path()) {
            Some(Route::Root) => commands::root_handler(request),
            Some(Route::Echo(text)) => commands::echo_handler(text),
            Some(Route::UserAgent) => commands::user_agent_handler(request),
            Some(Route::Files(name)) => commands::files_handler(request, name, self.store.as_ref()),
            None => Response::not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::StatusCode;
    use crate::storage::MemoryStore;

    fn make_request(raw: &[u8]) -> Request {
        Request::parse(raw).unwrap()
    }

    fn memory_router(store: MemoryStore) -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(store);
        (Router::new(store.clone()), store)
    }

    #[test]
    fn test_resolve_segments() {
        assert_eq!(Route::resolve("/"), Some(Route::Root));
        assert_eq!(Route::resolve("/echo/abc"), Some(Route::Echo("abc")));
        assert_eq!(Route::resolve("/echo"), Some(Route::Echo("")));
        assert_eq!(Route::resolve("/user-agent"), Some(Route::UserAgent));
        assert_eq!(Route::resolve("/files/dir/a.txt"), Some(Route::Files("dir/a.txt")));
    }

    #[test]
    fn test_resolve_unknown_segments() {
        assert_eq!(Route::resolve("/unknown/path"), None);
        assert_eq!(Route::resolve("/Echo/abc"), None);
        assert_eq!(Route::resolve("/echoes"), None);
        assert_eq!(Route::resolve("*"), None);
    }

    #[test]
    fn test_resolve_requires_leading_slash() {
        assert_eq!(Route::resolve("echo/abc"), None);
        assert_eq!(Route::resolve("user-agent"), None);
        assert_eq!(Route::resolve(""), None);
    }

    #[test]
    fn test_route_without_leading_slash_is_not_found() {
        let (router, _) = memory_router(MemoryStore::default());
        let response = router.route(&make_request(b"GET echo/abc HTTP/1.1\r\n\r\n"));

        assert_eq!(response, Response::not_found());
    }

    #[test]
    fn test_route_root() {
        let (router, _) = memory_router(MemoryStore::default());
        let response = router.route(&make_request(b"GET / HTTP/1.1\r\n\r\n"));

        assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\n\r\n");
    }

    #[test]
    fn test_route_echo() {
        let (router, _) = memory_router(MemoryStore::default());
        let response = router.route(&make_request(b"GET /echo/abc123 HTTP/1.1\r\n\r\n"));

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), b"abc123");
        assert_eq!(response.headers().get("Content-Length"), Some("6"));
    }

    #[test]
    fn test_route_user_agent_duplicate_header() {
        let (router, _) = memory_router(MemoryStore::default());
        let request = make_request(
            b"GET /user-agent HTTP/1.1\r\nUser-Agent: old/1.0\r\nUser-Agent: new/2.0\r\n\r\n",
        );

        assert_eq!(router.route(&request).body(), b"new/2.0");
    }

    #[test]
    fn test_route_files_read_and_write() {
        let (router, store) = memory_router(MemoryStore::default());

        let missing = router.route(&make_request(b"GET /files/new.txt HTTP/1.1\r\n\r\n"));
        assert_eq!(missing.status(), StatusCode::NotFound);

        let created = router.route(&make_request(b"POST /files/new.txt HTTP/1.1\r\n\r\nhello"));
        assert_eq!(created.status(), StatusCode::Created);
        assert_eq!(store.contents("new.txt"), Some(b"hello".to_vec()));

        let read = router.route(&make_request(b"GET /files/new.txt HTTP/1.1\r\n\r\n"));
        assert_eq!(read.status(), StatusCode::Ok);
        assert_eq!(read.body(), b"hello");
    }

    #[test]
    fn test_route_not_found() {
        let (router, _) = memory_router(MemoryStore::default());
        let response = router.route(&make_request(b"GET /unknown/path HTTP/1.1\r\n\r\n"));

        assert_eq!(response.to_bytes(), b"HTTP/1.1 404 Not Found\r\n\r\n");
    }

    #[test]
    fn test_route_is_repeatable() {
        let (router, _) = memory_router(MemoryStore::default().with_file("a", b"x"));
        let request = make_request(b"GET /files/a HTTP/1.1\r\n\r\n");

        assert_eq!(router.route(&request).to_bytes(), router.route(&request).to_bytes());
    }

    #[test]
    fn test_content_length_matches_body_on_every_route() {
        let (router, _) = memory_router(MemoryStore::default().with_file("f", b"file body"));
        let requests: [&[u8]; 6] = [
            b"GET / HTTP/1.1\r\n\r\n",
            b"GET /echo/some/text HTTP/1.1\r\n\r\n",
            b"GET /user-agent HTTP/1.1\r\nUser-Agent: ua\r\n\r\n",
            b"GET /files/f HTTP/1.1\r\n\r\n",
            b"POST /files/g HTTP/1.1\r\n\r\nwritten",
            b"GET /nope HTTP/1.1\r\n\r\n",
        ];

        for raw in requests {
            let response = router.route(&make_request(raw));
            match response.headers().get("Content-Length") {
                Some(length) => assert_eq!(length, response.body().len().to_string()),
                None => assert!(response.body().is_empty()),
            }
        }
    }
}
