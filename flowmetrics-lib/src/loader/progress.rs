use camino::Utf8Path;

/// Told about each snapshot file as it is loaded
pub trait Progress {
    /// Called once per matched file, before the file is read.
    fn file_loading(&mut self, path: &Utf8Path);
}

impl<F> Progress for F
where
    F: FnMut(&Utf8Path),
{
    fn file_loading(&mut self, path: &Utf8Path) {
        self(path);
    }
}
