use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = SpecFormat::from_path(path);
    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  #[must_use]
  pub const fn format(&self) -> SpecFormat {
    self.format
  }

  pub fn parse(&self) -> anyhow::Result<Document> {
    let content = std::str::from_utf8(self.file.as_slice())?;
    let document = match self.format {
      SpecFormat::Json => Document::from_json_str(content)?,
      SpecFormat::Yaml => Document::from_yaml_str(content)?,
    };

    if !document.is_supported_version() {
      anyhow::bail!(
        "unsupported OpenAPI version `{}`: only 3.0.x documents are accepted, convert the document first",
        document.openapi
      );
    }

    Ok(document)
  }
}
