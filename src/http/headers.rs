//! # Headers HTTP
//! src/http/headers.rs
//!
//! Mapa explícito nombre → valor usado tanto por requests como por responses.
//!
//! - Las claves se comparan tal cual llegan del wire (case-sensitive):
//!   `User-Agent` y `user-agent` son headers distintos.
//! - Si una clave se inserta dos veces, gana la última (el valor anterior
//!   se sobrescribe sin aviso).
//! - El orden de iteración es el de la primera inserción de cada clave, así
//!   una misma response siempre se serializa a los mismos bytes.
//!
//! Las búsquedas son lineales: cada `insert` recorre las entradas, así que
//! una cabecera con miles de headers distintos cuesta tiempo cuadrático.
//! Con el límite de una lectura de 64 KiB por conexión es aceptable.

/// Colección ordenada de headers con semántica last-write-wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Crea una colección vacía
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta un header; si ya existía, reemplaza su valor en la misma posición
    ///
    /// # Ejemplo
    /// ```
    /// use route_server::http::Headers;
    ///
    /// let mut headers = Headers::new();
    /// headers.insert("User-Agent", "first");
    /// headers.insert("User-Agent", "second");
    ///
    /// assert_eq!(headers.get("User-Agent"), Some("second"));
    /// assert_eq!(headers.len(), 1);
    /// ```
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Obtiene el valor de un header (comparación exacta del nombre)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Itera en orden de primera inserción
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut headers = Headers::new();
        headers.insert("Host", "localhost:4221");

        assert_eq!(headers.get("Host"), Some("localhost:4221"));
        assert!(headers.contains("Host"));
        assert_eq!(headers.get("Accept"), None);
    }

    #[test]
    fn test_duplicate_keeps_last_value() {
        let mut headers = Headers::new();
        headers.insert("X-Trace", "a");
        headers.insert("Accept", "*/*");
        headers.insert("X-Trace", "b");

        assert_eq!(headers.get("X-Trace"), Some("b"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_overwrite_preserves_position() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/plain");
        headers.insert("Content-Length", "3");
        headers.insert("Content-Type", "application/octet-stream");

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Content-Type", "Content-Length"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut headers = Headers::new();
        headers.insert("user-agent", "lower");

        assert_eq!(headers.get("User-Agent"), None);
        assert_eq!(headers.get("user-agent"), Some("lower"));
    }

    #[test]
    fn test_empty() {
        let headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.iter().count(), 0);
    }
}
