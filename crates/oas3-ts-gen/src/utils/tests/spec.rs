use std::{io::Write, path::Path};

use crate::utils::spec::{SpecFormat, SpecLoader};

#[test]
fn test_format_from_extension() {
  assert_eq!(SpecFormat::from_path(Path::new("api.yaml")), SpecFormat::Yaml);
  assert_eq!(SpecFormat::from_path(Path::new("api.yml")), SpecFormat::Yaml);
  assert_eq!(SpecFormat::from_path(Path::new("api.json")), SpecFormat::Json);
  assert_eq!(SpecFormat::from_path(Path::new("api")), SpecFormat::Json);
}

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
  let mut file = tempfile::Builder::new()
    .suffix(suffix)
    .tempfile()
    .expect("temp file should be created");
  file.write_all(contents.as_bytes()).expect("temp file should be written");
  file.flush().expect("temp file should flush");
  file
}

#[tokio::test]
async fn test_loader_parses_yaml_fixture() {
  let file = write_temp(".yaml", include_str!("../../../fixtures/petstore.yaml"));
  let loader = SpecLoader::open(file.path()).await.expect("loader should open file");

  assert_eq!(loader.format(), SpecFormat::Yaml);
  let document = loader.parse().expect("petstore should parse");
  assert_eq!(document.info.title, "Swagger Petstore");
}

#[tokio::test]
async fn test_loader_rejects_other_versions() {
  let file = write_temp(
    ".json",
    r#"{"openapi": "3.1.0", "info": {"title": "Next", "version": "1"}, "paths": {}}"#,
  );
  let loader = SpecLoader::open(file.path()).await.expect("loader should open file");

  let err = loader.parse().expect_err("3.1 should be rejected");
  assert!(err.to_string().contains("unsupported OpenAPI version `3.1.0`"));
}
