/// Blocking user-facing notification (the contact form's only feedback
/// channel).
pub trait Notifier {
    fn alert(&self, message: &str);
}
