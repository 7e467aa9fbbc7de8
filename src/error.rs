use std::fmt;
use std::path::PathBuf;

// 资源加载失败，属于致命错误
#[derive(Debug)]
pub struct AssetError {
    pub path: PathBuf,
    pub source: image::ImageError,
}

impl AssetError {
    pub fn new(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load asset {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
