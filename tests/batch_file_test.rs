//! Loading transaction batches from disk and running them through the container

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use rslimit::application::{ApplicationError, TransactionBatch};
use rslimit::cli::CliError;
use rslimit::config::Settings;
use rslimit::domain::{sample, DomainError};
use rslimit::exitcode;
use rslimit::infrastructure::di::ServiceContainer;
use rslimit::infrastructure::traits::{FileSystem, RealFileSystem};
use rslimit::util::testing;

const BREACHING_BATCH: &str = r#"
[[transactions]]
path = ["Level 1", "Product 1", "Product 1A"]
amount = 250000
tenor = 4

[[transactions]]
path = ["Level 1", "Product 9"]
amount = 10
tenor = 1
"#;

#[test]
fn given_batch_file_when_loading_then_reads_every_transaction() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.toml");
    fs::write(&path, BREACHING_BATCH).unwrap();

    // Act
    let batch = TransactionBatch::load(&RealFileSystem, &path).expect("load batch");

    // Assert
    assert_eq!(batch.len(), 2);
    assert_eq!(
        batch.transactions[0].path,
        vec!["Level 1", "Product 1", "Product 1A"]
    );
    assert_eq!(batch.transactions[0].amount, Decimal::from(250_000));
}

#[test]
fn given_missing_file_when_loading_then_operation_fails_with_path() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    // Act
    let result = TransactionBatch::load(&RealFileSystem, &path);

    // Assert
    match result {
        Err(ApplicationError::OperationFailed { context, .. }) => {
            assert!(context.contains("absent.toml"), "context: {context}");
        }
        other => panic!("expected operation failure, got {:?}", other),
    }
}

#[test]
fn given_no_batch_file_when_container_loads_then_uses_sample_batch() {
    // Arrange
    let container = ServiceContainer::new(Settings::default());

    // Act
    let transactions = container.transactions(None).unwrap();

    // Assert
    assert_eq!(transactions, sample::sample_transactions());
}

#[test]
fn given_breaching_batch_file_when_running_then_reports_breach_and_unresolved() {
    // Arrange
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("batch.toml");
    fs::write(&path, BREACHING_BATCH).unwrap();
    let container = ServiceContainer::new(Settings::default());

    // Act
    let transactions = container.transactions(Some(path.as_path())).unwrap();
    let report = container
        .exposure
        .run(&sample::sample_hierarchy(), transactions)
        .unwrap();

    // Assert
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].path_display(), "Level 1 / Product 9");
    let names: Vec<_> = report.breaches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Product 1A"]);
    assert_eq!(report.breaches[0].observed, Decimal::from(250_000));
}

const NEAR_MAX_BATCH: &str = r#"
[[transactions]]
path = ["Level 1", "Product 1", "Product 1A"]
amount = "79228162514264337593543950335"
tenor = 1

[[transactions]]
path = ["Level 1", "Product 1", "Product 1B"]
amount = "1"
tenor = 1
"#;

#[test]
fn given_amounts_summing_past_decimal_max_when_running_then_data_error_not_panic() {
    // Arrange
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("huge.toml");
    fs::write(&path, NEAR_MAX_BATCH).unwrap();
    let container = ServiceContainer::new(Settings::default());
    let transactions = container.transactions(Some(path.as_path())).unwrap();
    assert_eq!(transactions[0].amount, Decimal::MAX);

    // Act
    let err = container
        .exposure
        .run(&sample::sample_hierarchy(), transactions)
        .unwrap_err();

    // Assert: each leaf fits, their parent does not
    match &err {
        ApplicationError::Domain(DomainError::AmountOverflow { name, .. }) => {
            assert_eq!(name, "Product 1");
        }
        other => panic!("expected amount overflow, got {:?}", other),
    }
    assert_eq!(CliError::from(err).exit_code(), exitcode::DATAERR);
}

/// Serves one batch from memory.
struct InMemoryBatch {
    path: PathBuf,
    content: String,
}

impl FileSystem for InMemoryBatch {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if path == self.path {
            Ok(self.content.clone())
        } else {
            Err(io::Error::new(io::ErrorKind::NotFound, "not in memory"))
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        path == self.path
    }
}

#[test]
fn given_injected_filesystem_when_container_loads_then_reads_through_it() {
    // Arrange
    let memory = InMemoryBatch {
        path: PathBuf::from("book/batch.toml"),
        content: BREACHING_BATCH.to_string(),
    };
    let container = ServiceContainer::with_deps(Settings::default(), Arc::new(memory));

    // Act
    let transactions = container
        .transactions(Some(Path::new("book/batch.toml")))
        .unwrap();

    // Assert
    assert_eq!(transactions.len(), 2);
    assert!(container.fs.is_file(Path::new("book/batch.toml")));
    assert!(!container.fs.is_file(Path::new("elsewhere.toml")));
}
