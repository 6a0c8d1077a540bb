use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::errors::WikiError;
use crate::services::title::Title;
use crate::types::Page;

/// Flat-file page storage: one `<title>.txt` per page
#[derive(Debug, Clone)]
pub struct PageStore {
    data_dir: PathBuf,
}

impl PageStore {
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Creating PageStore with data directory: {:?}", data_dir);
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory if it does not exist yet
    pub fn ensure_dir(&self) -> Result<(), WikiError> {
        if self.data_dir.is_dir() {
            return Ok(());
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(&self.data_dir).map_err(|e| {
            error!("Failed to create data directory {:?}: {}", self.data_dir, e);
            WikiError::Io(e)
        })?;

        info!("Created data directory {:?}", self.data_dir);
        Ok(())
    }

    /// File backing `title`
    pub fn path_for(&self, title: &Title) -> PathBuf {
        self.data_dir.join(format!("{}.txt", title))
    }

    /// Read a page from disk
    pub fn load(&self, title: &Title) -> Result<Page, WikiError> {
        let path = self.path_for(title);
        debug!("Loading page {} from {:?}", title, path);

        let body = fs::read(&path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                debug!("Page file does not exist: {:?}", path);
                WikiError::NotFound
            } else {
                warn!("Failed to read page file {:?}: {}", path, e);
                WikiError::Io(e)
            }
        })?;

        info!("Loaded page {}, {} bytes", title, body.len());
        Ok(Page { title: title.clone(), body })
    }

    /// Overwrite a page's file with its body. New files are owner read/write only.
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.path_for(&page.title);
        debug!("Saving page {} to {:?}", page.title, path);

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let result = options
            .open(&path)
            .and_then(|mut file| file.write_all(&page.body));
        if let Err(e) = result {
            error!("Failed to write page file {:?}: {}", path, e);
            return Err(WikiError::Io(e));
        }

        info!("Saved page {}, {} bytes", page.title, page.body.len());
        Ok(())
    }
}
