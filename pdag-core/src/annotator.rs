//! The annotation subsystem is an external collaborator (spec.md section
//! 1/6): the core only needs a place to call into it once a terminal's
//! tags are known. [`NoopAnnotator`] is the default; embedders that ship a
//! real tag-metadata store provide their own [`Annotator`].

use serde_json::{Map, Value};

pub trait Annotator {
    fn annotate(&self, tags: &Value, result: &mut Map<String, Value>);
}

pub struct NoopAnnotator;

impl Annotator for NoopAnnotator {
    fn annotate(&self, _tags: &Value, _result: &mut Map<String, Value>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingAnnotator {
        calls: std::cell::Cell<u32>,
    }

    impl Annotator for CountingAnnotator {
        fn annotate(&self, _tags: &Value, result: &mut Map<String, Value>) {
            self.calls.set(self.calls.get() + 1);
            result.insert("annotated".into(), Value::Bool(true));
        }
    }

    #[test]
    fn custom_annotator_is_invoked() {
        let annotator = CountingAnnotator {
            calls: std::cell::Cell::new(0),
        };
        let mut result = Map::new();
        annotator.annotate(&Value::Array(vec![]), &mut result);
        assert_eq!(annotator.calls.get(), 1);
        assert_eq!(result.get("annotated"), Some(&Value::Bool(true)));
    }
}
