/// Session check routes.
pub(crate) mod auth;

/// API documentation routes.
pub(crate) mod docs;

/// Root health check route.
pub(crate) mod health;

/// Quality inspection workflow routes.
pub(crate) mod quality;
