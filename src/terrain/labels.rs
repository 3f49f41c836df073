use crate::terrain::terrain_class::TerrainClass;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LabelContractError {
    #[error("model emits {actual} classes but {expected} terrain labels are known")]
    ClassCountMismatch { expected: usize, actual: usize },
    #[error("labels file lists {actual} labels but {expected} terrain labels are known")]
    LabelCountMismatch { expected: usize, actual: usize },
    #[error("label #{index} is {found:?} but {expected:?} was expected")]
    OrderMismatch {
        index: usize,
        expected: &'static str,
        found: String,
    },
    #[error("failed to read labels file: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks that the classifier's output indices line up with [`TerrainClass::ALL`].
///
/// `class_count` is the size of the model's output vector when known. The
/// optional sidecar file lists the labels the model was trained with, one per
/// line, in output order.
pub fn verify_label_contract(
    class_count: Option<usize>,
    labels_path: Option<&Path>,
) -> Result<(), LabelContractError> {
    let expected = TerrainClass::ALL.len();

    if let Some(actual) = class_count {
        if actual != expected {
            return Err(LabelContractError::ClassCountMismatch { expected, actual });
        }
    }

    if let Some(path) = labels_path {
        let contents = std::fs::read_to_string(path)?;
        verify_label_list(&contents)?;
    }

    Ok(())
}

pub fn verify_label_list(contents: &str) -> Result<(), LabelContractError> {
    let labels: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for (index, (class, found)) in TerrainClass::ALL.iter().zip(&labels).enumerate() {
        if class.label() != *found {
            return Err(LabelContractError::OrderMismatch {
                index,
                expected: class.label(),
                found: found.to_string(),
            });
        }
    }

    if labels.len() != TerrainClass::ALL.len() {
        return Err(LabelContractError::LabelCountMismatch {
            expected: TerrainClass::ALL.len(),
            actual: labels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET_ORDER: &str = "AnnualCrop\nForest\nHerbaceousVegetation\nHighway\nIndustrial\nPasture\nPermanentCrop\nResidential\nRiver\nSeaLake\n";

    #[test]
    fn test_accepts_matching_count_without_sidecar() {
        assert!(verify_label_contract(Some(10), None).is_ok());
        assert!(verify_label_contract(None, None).is_ok());
    }

    #[test]
    fn test_rejects_wrong_class_count() {
        let result = verify_label_contract(Some(1000), None);
        assert!(matches!(
            result,
            Err(LabelContractError::ClassCountMismatch {
                expected: 10,
                actual: 1000
            })
        ));
    }

    #[test]
    fn test_label_list_in_dataset_order() {
        assert!(verify_label_list(DATASET_ORDER).is_ok());
        assert!(verify_label_list(&DATASET_ORDER.replace('\n', "\r\n")).is_ok());
    }

    #[test]
    fn test_label_list_swapped() {
        let swapped = DATASET_ORDER.replace("River\nSeaLake", "SeaLake\nRiver");
        match verify_label_list(&swapped) {
            Err(LabelContractError::OrderMismatch { index, found, .. }) => {
                assert_eq!(index, 8);
                assert_eq!(found, "SeaLake");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_label_list_truncated() {
        let truncated = DATASET_ORDER.replace("SeaLake\n", "");
        assert!(matches!(
            verify_label_list(&truncated),
            Err(LabelContractError::LabelCountMismatch { actual: 9, .. })
        ));
    }

    #[test]
    fn test_reads_sidecar_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        std::fs::write(&path, DATASET_ORDER).unwrap();

        assert!(verify_label_contract(Some(10), Some(&path)).is_ok());
        assert!(matches!(
            verify_label_contract(Some(10), Some(&dir.path().join("missing.txt"))),
            Err(LabelContractError::Io(_))
        ));
    }
}
