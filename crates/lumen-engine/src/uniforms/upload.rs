use std::collections::HashSet;

use super::UniformSink;

/// Best-effort uniform uploader.
///
/// A name the program does not expose (optimized out, misspelled, absent from
/// this shader variant) skips that single upload and never fails the batch.
/// Each missing name is logged once until [`reset_warnings`](Self::reset_warnings).
#[derive(Debug, Default)]
pub struct UniformUploader {
    reported: HashSet<String>,
}

impl UniformUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets which missing names were already reported.
    pub fn reset_warnings(&mut self) {
        self.reported.clear();
    }

    /// Names reported as missing since the last reset.
    pub fn reported(&self) -> impl Iterator<Item = &str> {
        self.reported.iter().map(String::as_str)
    }

    /// Returns `true` if the value was written.
    pub fn f32<S: UniformSink>(&mut self, sink: &mut S, name: &str, value: f32) -> bool {
        match self.resolve(sink, name) {
            Some(loc) => {
                sink.set_f32(&loc, value);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the value was written.
    pub fn i32<S: UniformSink>(&mut self, sink: &mut S, name: &str, value: i32) -> bool {
        match self.resolve(sink, name) {
            Some(loc) => {
                sink.set_i32(&loc, value);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the values were written.
    pub fn f32_array<S: UniformSink>(&mut self, sink: &mut S, name: &str, values: &[f32]) -> bool {
        match self.resolve(sink, name) {
            Some(loc) => {
                sink.set_f32_array(&loc, values);
                true
            }
            None => false,
        }
    }

    fn resolve<S: UniformSink>(&mut self, sink: &S, name: &str) -> Option<S::Location> {
        let loc = sink.location(name);
        if loc.is_none() && self.reported.insert(name.to_owned()) {
            log::warn!("uniform `{name}` not found in program; skipping upload");
        }
        loc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Value {
        F32(f32),
        I32(i32),
        Array(Vec<f32>),
    }

    /// Sink exposing a fixed set of names, recording writes in order.
    struct Recorder {
        names: Vec<&'static str>,
        writes: Vec<(&'static str, Value)>,
    }

    impl Recorder {
        fn with(names: &[&'static str]) -> Self {
            Self { names: names.to_vec(), writes: Vec::new() }
        }
    }

    impl UniformSink for Recorder {
        type Location = &'static str;

        fn location(&self, name: &str) -> Option<Self::Location> {
            self.names.iter().copied().find(|n| *n == name)
        }

        fn set_f32(&mut self, location: &Self::Location, value: f32) {
            self.writes.push((location, Value::F32(value)));
        }

        fn set_i32(&mut self, location: &Self::Location, value: i32) {
            self.writes.push((location, Value::I32(value)));
        }

        fn set_f32_array(&mut self, location: &Self::Location, values: &[f32]) {
            self.writes.push((location, Value::Array(values.to_vec())));
        }
    }

    #[test]
    fn known_names_are_written() {
        let mut sink = Recorder::with(&["x", "pV", "light"]);
        let mut up = UniformUploader::new();

        assert!(up.f32(&mut sink, "x", 1.5));
        assert!(up.i32(&mut sink, "pV", 6));
        assert!(up.f32_array(&mut sink, "light", &[0.0, 2.5, -7.75]));

        assert_eq!(
            sink.writes,
            vec![
                ("x", Value::F32(1.5)),
                ("pV", Value::I32(6)),
                ("light", Value::Array(vec![0.0, 2.5, -7.75])),
            ]
        );
    }

    #[test]
    fn missing_name_skips_only_that_upload() {
        let mut sink = Recorder::with(&["x", "z"]);
        let mut up = UniformUploader::new();

        assert!(up.f32(&mut sink, "x", 1.0));
        assert!(!up.f32(&mut sink, "y", 2.0));
        assert!(up.f32(&mut sink, "z", 3.0));

        assert_eq!(sink.writes, vec![("x", Value::F32(1.0)), ("z", Value::F32(3.0))]);
    }

    #[test]
    fn missing_name_reported_once_until_reset() {
        let mut sink = Recorder::with(&[]);
        let mut up = UniformUploader::new();

        up.f32(&mut sink, "y", 0.0);
        up.f32(&mut sink, "y", 0.5);
        up.i32(&mut sink, "sV", 4);

        let mut reported: Vec<_> = up.reported().collect();
        reported.sort_unstable();
        assert_eq!(reported, vec!["sV", "y"]);

        up.reset_warnings();
        assert_eq!(up.reported().count(), 0);
        assert!(sink.writes.is_empty());
    }
}
