//! # Códigos de Estado HTTP
//!
//! El servidor sólo emite tres status lines, siempre en HTTP/1.1:
//!
//! - **200 OK**: ruta resuelta (raíz, echo, user-agent, lectura de archivo)
//! - **201 Created**: archivo escrito por la ruta `files`
//! - **404 Not Found**: ruta desconocida o fallo de lectura/escritura

/// Representa los códigos de estado HTTP que soporta nuestro servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - La petición fue exitosa
    Ok = 200,

    /// 201 Created - Se creó (o sobrescribió) un archivo
    Created = 201,

    /// 404 Not Found - Ruta o recurso no encontrado
    NotFound = 404,
}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use route_server::http::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Status line completa, ya terminada en `\r\n`
    ///
    /// # Ejemplo
    /// ```
    /// use route_server::http::StatusCode;
    /// assert_eq!(StatusCode::NotFound.status_line(), "HTTP/1.1 404 Not Found\r\n");
    /// ```
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "HTTP/1.1 200 OK\r\n",
            StatusCode::Created => "HTTP/1.1 201 Created\r\n",
            StatusCode::NotFound => "HTTP/1.1 404 Not Found\r\n",
        }
    }

    /// Verifica si el código indica éxito (2xx)
    pub fn is_success(&self) -> bool {
        matches!(self, StatusCode::Ok | StatusCode::Created)
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
