//! Placeholder values shared by tests. None of these are real credentials.

/// CSRF token the mocked login endpoint issues.
pub static TEST_CSRF_TOKEN: &str = "test-csrf-token";

pub static TEST_USERNAME: &str = "operador";

pub static TEST_PASSWORD: &str = "senha-de-teste";

/// Login page of the mocked backend, also used as the configured login path.
pub static TEST_LOGIN_PAGE: &str = "<!doctype html><html><body><form action=\"/login\"></form></body></html>";
