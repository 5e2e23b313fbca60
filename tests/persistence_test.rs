//! Integration tests for saving and reloading trained models.

use tempfile::Builder;

use bayesian::classifier::{BinaryClassifier, NEGATIVE, NaiveBayesClassifier, POSITIVE};
use bayesian::error::{BayesianError, Result};
use bayesian::radix::Tree;

fn trained_binary() -> Result<BinaryClassifier> {
    let mut classifier = BinaryClassifier::new(1.0)?;
    classifier.learn_positive(&[
        "spam", "spam", "spam", "spam", "spam", "spam", "ham", "apple", "cake", "taco", "app",
        "cat", "medicine", "medical", "dogged",
    ])?;
    classifier.learn_negative(&[
        "ham", "ham", "ham", "ham", "ham", "spam", "apple", "cake", "app", "dog", "rat", "bat",
        "rake", "dogged", "bothered",
    ])?;
    Ok(classifier)
}

#[test]
fn test_save_and_load_file() -> Result<()> {
    let dir = Builder::new().prefix("test_model").tempdir()?;
    let path = dir.path().join("model.bin");

    let classifier = trained_binary()?;
    classifier.save_to_file(&path)?;

    let loaded = BinaryClassifier::load_from_file(&path)?;
    assert_eq!(loaded, classifier);

    let scores = loaded.scores(&["spam"]);
    assert_eq!(scores.best, POSITIVE);
    assert_eq!(scores, classifier.scores(&["spam"]));

    for document in [vec!["apple"], vec!["dog"], vec!["both", "cake"]] {
        assert_eq!(loaded.scores(&document), classifier.scores(&document));
    }

    Ok(())
}

#[test]
fn test_training_continues_after_reload() -> Result<()> {
    let mut original = trained_binary()?;
    let mut loaded = BinaryClassifier::from_bytes(&original.to_bytes()?)?;

    for classifier in [&mut original, &mut loaded] {
        classifier.learn_negative(&["dogma", "do", "spam"])?;
        classifier.learn_positive(&["medic", "bothered"])?;
    }

    assert_eq!(loaded, original);
    assert_eq!(loaded.tree().find("do"), Some(&[1, 0][..]));
    assert_eq!(loaded.tree().find("medic"), Some(&[0, 1][..]));
    loaded.tree().check_invariants()?;

    let words: Vec<String> = loaded.tree().iter().map(|(word, _)| word).collect();
    let expected: Vec<String> = original.tree().iter().map(|(word, _)| word).collect();
    assert_eq!(words, expected);

    Ok(())
}

#[test]
fn test_load_missing_file() {
    let dir = Builder::new().prefix("test_missing").tempdir().unwrap();
    let result = NaiveBayesClassifier::load_from_file(dir.path().join("absent.bin"));
    assert!(matches!(result, Err(BayesianError::Io(_))));
}

#[test]
fn test_load_rejects_garbage() {
    let result = NaiveBayesClassifier::from_bytes(b"definitely not a model file");
    assert!(result.is_err());
}

#[test]
fn test_json_round_trip() -> Result<()> {
    let classifier = trained_binary()?;

    let json = serde_json::to_string(&classifier)?;
    let decoded: BinaryClassifier = serde_json::from_str(&json)?;
    decoded.inner().validate()?;

    assert_eq!(decoded, classifier);
    assert_eq!(decoded.scores(&["dog"]).best, NEGATIVE);

    Ok(())
}

#[test]
fn test_tampered_json_fails_validation() -> Result<()> {
    let mut tree = Tree::new(2)?;
    tree.insert("word", 1)?;

    let mut value = serde_json::to_value(&tree)?;
    value["unique_words"] = serde_json::json!(3);
    assert!(serde_json::from_value::<Tree>(value).is_err());

    let mut value = serde_json::to_value(&tree)?;
    value["nodes"][1]["counts"] = serde_json::json!([u64::MAX, 1]);
    value["totals"] = serde_json::json!([u64::MAX, 1]);
    let result = serde_json::from_value::<Tree>(value);
    assert!(result.is_ok());

    Ok(())
}

#[test]
fn test_tampered_json_counts_overflow() -> Result<()> {
    let mut tree = Tree::new(1)?;
    tree.insert("a", 0)?;
    tree.insert("b", 0)?;

    let mut value = serde_json::to_value(&tree)?;
    value["nodes"][1]["counts"] = serde_json::json!([u64::MAX]);
    let result = serde_json::from_value::<Tree>(value);
    assert!(result.is_err());

    Ok(())
}
