//! Transform pipelines.

use std::fmt;

use crate::transform::Transform;

/// An ordered chain of string transforms.
///
/// Stages run left to right: the output of each stage is the input of the
/// next. An empty pipeline is the identity. A pipeline is itself a
/// [`Transform`], so pipelines nest.
///
/// # Example
///
/// ```
/// use caseconv::{Pipeline, transform};
///
/// let shout = Pipeline::new()
///     .then(transform::uppercase)
///     .then(transform::insert_delimiter("!"));
///
/// assert_eq!(shout.apply("hi there"), "HI!THERE");
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Transform>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage to run after the existing ones.
    pub fn then(mut self, stage: impl Transform + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in order on `input`.
    pub fn apply(&self, input: &str) -> String {
        tracing::trace!(stages = self.stages.len(), len = input.len(), "applying pipeline");
        self.stages
            .iter()
            .fold(input.to_string(), |acc, stage| stage.apply(&acc))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl Transform for Pipeline {
    fn apply(&self, input: &str) -> String {
        Pipeline::apply(self, input)
    }
}

impl FromIterator<Box<dyn Transform>> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Box<dyn Transform>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

/// Compose transforms into a single pipeline, first listed first applied.
pub fn compose<I, T>(stages: I) -> Pipeline
where
    I: IntoIterator<Item = T>,
    T: Transform + 'static,
{
    stages
        .into_iter()
        .fold(Pipeline::new(), |pipeline, stage| pipeline.then(stage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{DASH, collapse_spaces, insert_delimiter, lowercase, uppercase};

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply("Hello World"), "Hello World");
        assert_eq!(pipeline.apply(""), "");
    }

    #[test]
    fn test_pipeline_runs_stages_in_order() {
        // Collapsing first leaves no spaces for the dash stage.
        let collapse_then_dash = Pipeline::new()
            .then(collapse_spaces)
            .then(insert_delimiter(DASH));
        let dash_then_collapse = Pipeline::new()
            .then(insert_delimiter(DASH))
            .then(collapse_spaces);

        assert_eq!(collapse_then_dash.apply("a b"), "ab");
        assert_eq!(dash_then_collapse.apply("a b"), "a-b");
        assert_eq!(collapse_then_dash.len(), 2);
    }

    #[test]
    fn test_last_stage_wins() {
        let pipeline = Pipeline::new().then(uppercase).then(lowercase);
        assert_eq!(pipeline.apply("MiXeD"), "mixed");
    }

    #[test]
    fn test_nested_pipeline() {
        let inner = Pipeline::new().then(uppercase);
        let outer = Pipeline::new().then(inner).then(insert_delimiter(DASH));
        assert_eq!(outer.apply("a b"), "A-B");
    }

    #[test]
    fn test_compose() {
        let pipeline = compose([uppercase as fn(&str) -> String, collapse_spaces]);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.apply("a b"), "AB");

        let identity = compose(Vec::<fn(&str) -> String>::new());
        assert_eq!(identity.apply("a b"), "a b");
    }

    #[test]
    fn test_from_iter_boxed() {
        let stages: Vec<Box<dyn Transform>> =
            vec![Box::new(insert_delimiter(DASH)), Box::new(uppercase)];
        let pipeline: Pipeline = stages.into_iter().collect();
        assert_eq!(pipeline.apply("a b"), "A-B");
    }
}
