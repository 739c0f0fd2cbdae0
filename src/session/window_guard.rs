use crate::model::ShellError;
use crate::shell::AppShell;
use std::ops::{Deref, DerefMut};
use tracing::error;

/// Open window that is closed when the guard goes out of scope.
///
/// Every way out of the render loop (normal end, stop flag, error, panic)
/// releases the window through this one `Drop`.
pub struct WindowGuard<'a, S>
where
    S: AppShell + ?Sized,
{
    shell: &'a mut S,
}

impl<'a, S> WindowGuard<'a, S>
where
    S: AppShell + ?Sized,
{
    /// Open the window on `shell`.
    pub fn open(shell: &'a mut S, title: &str) -> Result<Self, ShellError> {
        shell.init_window(title)?;
        Ok(Self { shell })
    }
}

impl<S> Deref for WindowGuard<'_, S>
where
    S: AppShell + ?Sized,
{
    type Target = S;

    fn deref(&self) -> &S {
        self.shell
    }
}

impl<S> DerefMut for WindowGuard<'_, S>
where
    S: AppShell + ?Sized,
{
    fn deref_mut(&mut self) -> &mut S {
        self.shell
    }
}

impl<S> Drop for WindowGuard<'_, S>
where
    S: AppShell + ?Sized,
{
    fn drop(&mut self) {
        if let Err(err) = self.shell.close_window() {
            error!(error = %err, "Failed to close window");
        }
    }
}
