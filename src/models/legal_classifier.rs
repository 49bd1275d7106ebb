use crate::constants::{LEGAL_CLASSIFIER_BIAS_FEATURE, LEGAL_CLASSIFIER_DECISION_THRESHOLD};
use crate::models::{LogReporter, Reporter};
use crate::types::FeatureWeightMap;
use crate::utils::{generate_word_combinations, normalize, normalize_key, read_source_to_string};
use crate::Error;
use csv::ReaderBuilder;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Decides whether a company name carries legal-entity language.
///
/// Loading is a separate, explicit step so that name extraction can run without the model in
/// memory. `predict` before `load` fails with `Error::UninitializedModel`; an `Err` from `predict`
/// means "unknown", never "no".
pub trait LegalClassifier {
    fn model_id(&self) -> &str;

    fn is_loaded(&self) -> bool;

    fn load(&mut self) -> Result<(), Error>;

    fn predict(&self, name: &str) -> Result<bool, Error>;
}

enum WeightSource {
    File(PathBuf),
    InMemory(FeatureWeightMap, f32),
}

struct LoadedModel {
    weights: FeatureWeightMap,
    bias: f32,
}

/// A linear model over the word combinations of a normalized name.
///
/// The score is `bias + sum(weight(combination))`, squashed through a sigmoid. A name is flagged
/// when the resulting probability reaches 0.5.
pub struct TokenWeightLegalClassifier {
    model_id: String,
    source: WeightSource,
    model: Option<LoadedModel>,
    reporter: Arc<dyn Reporter>,
}

impl TokenWeightLegalClassifier {
    /// A classifier whose weights are read from `weights_path` (TSV `feature<TAB>weight`) on `load`.
    pub fn new(model_id: &str, weights_path: impl Into<PathBuf>) -> Self {
        TokenWeightLegalClassifier {
            model_id: model_id.to_string(),
            source: WeightSource::File(weights_path.into()),
            model: None,
            reporter: Arc::new(LogReporter),
        }
    }

    /// A classifier backed by in-memory weights. `load` is still required before `predict`.
    pub fn from_weights<'s, I>(model_id: &str, weights: I, bias: f32) -> Self
    where
        I: IntoIterator<Item = (&'s str, f32)>,
    {
        let mut weight_map = FeatureWeightMap::new();
        for (feature, weight) in weights {
            weight_map.entry(normalize_key(feature)).or_insert(weight);
        }

        TokenWeightLegalClassifier {
            model_id: model_id.to_string(),
            source: WeightSource::InMemory(weight_map, bias),
            model: None,
            reporter: Arc::new(LogReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Probability that `name` contains a legal identifier.
    pub fn probability(&self, name: &str) -> Result<f32, Error> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| Error::UninitializedModel(self.model_id.clone()))?;

        let features = generate_word_combinations(&normalize(name));
        if features.is_empty() {
            return Err(Error::InferenceError(format!(
                "{} received no tokens for {:?}",
                self.model_id, name
            )));
        }

        let score = features
            .iter()
            .filter_map(|feature| model.weights.get(feature))
            .fold(model.bias, |acc, weight| acc + weight);

        let probability = 1.0 / (1.0 + (-score).exp());
        if !probability.is_finite() {
            return Err(Error::InferenceError(format!(
                "{} produced a non-finite score for {:?}",
                self.model_id, name
            )));
        }

        Ok(probability)
    }
}

impl LegalClassifier for TokenWeightLegalClassifier {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    fn load(&mut self) -> Result<(), Error> {
        let loaded = match &self.source {
            WeightSource::File(path) => read_source_to_string(path)
                .and_then(|contents| parse_weights(path, &contents)),
            WeightSource::InMemory(weights, bias) => Ok(LoadedModel {
                weights: weights.clone(),
                bias: *bias,
            }),
        };

        match loaded {
            Ok(model) => {
                self.reporter
                    .classifier_loaded(&self.model_id, model.weights.len());
                self.model = Some(model);
                Ok(())
            }
            Err(error) => {
                self.reporter.classifier_failed(&error);
                Err(error)
            }
        }
    }

    fn predict(&self, name: &str) -> Result<bool, Error> {
        match self.probability(name) {
            Ok(probability) => {
                let contains_legal = probability >= LEGAL_CLASSIFIER_DECISION_THRESHOLD;
                self.reporter
                    .classifier_predicted(&self.model_id, name, contains_legal);
                Ok(contains_legal)
            }
            Err(error) => {
                self.reporter.classifier_failed(&error);
                Err(error)
            }
        }
    }
}

fn parse_weights(path: &Path, tsv: &str) -> Result<LoadedModel, Error> {
    let source_name = path.display().to_string();
    let mut weights = FeatureWeightMap::new();
    let mut bias = 0.0;

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(Cursor::new(tsv));

    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::reference_load(&source_name, e.to_string()))?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        if record.len() != 2 {
            return Err(Error::reference_load(
                &source_name,
                format!(
                    "row {} has {} columns; expected feature and weight",
                    row_idx + 1,
                    record.len()
                ),
            ));
        }

        let weight: f32 = record[1].trim().parse().map_err(|_| {
            Error::reference_load(
                &source_name,
                format!("row {} has a non-numeric weight {:?}", row_idx + 1, &record[1]),
            )
        })?;

        // Checked before normalization, which would strip the underscores
        if record[0].trim() == LEGAL_CLASSIFIER_BIAS_FEATURE {
            bias = weight;
            continue;
        }

        let feature = normalize_key(&record[0]);
        if !feature.is_empty() {
            weights.entry(feature).or_insert(weight);
        }
    }

    Ok(LoadedModel { weights, bias })
}
