/// Logging port used by use cases and the storefront session.
///
/// Implemented in the infrastructure layer so the domain stays free of any
/// particular logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
