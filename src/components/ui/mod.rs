mod alert;
mod button;
mod spinner;
mod toaster;

pub(crate) use alert::Alert;
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use spinner::Spinner;
pub(crate) use toaster::Toaster;
