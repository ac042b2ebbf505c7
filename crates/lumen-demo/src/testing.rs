//! Uniform sink fake shared by the controller and upload tests.

use lumen_engine::uniforms::UniformSink;

#[derive(Debug, Clone, PartialEq)]
pub enum Upload {
    Float(String, f32),
    Int(String, i32),
    Array(String, Vec<f32>),
}

impl Upload {
    pub fn name(&self) -> &str {
        match self {
            Upload::Float(name, _) | Upload::Int(name, _) | Upload::Array(name, _) => name,
        }
    }
}

/// Records every write in order. Names listed in `missing` do not resolve.
#[derive(Debug, Default)]
pub struct Recorder {
    pub missing: Vec<String>,
    pub uploads: Vec<Upload>,
}

impl Recorder {
    pub fn missing(names: &[&str]) -> Self {
        Self {
            missing: names.iter().map(|n| n.to_string()).collect(),
            uploads: Vec::new(),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.uploads.iter().map(Upload::name).collect()
    }

    pub fn last_float(&self, name: &str) -> Option<f32> {
        self.uploads.iter().rev().find_map(|u| match u {
            Upload::Float(n, v) if n == name => Some(*v),
            _ => None,
        })
    }
}

impl UniformSink for Recorder {
    type Location = String;

    fn location(&self, name: &str) -> Option<Self::Location> {
        (!self.missing.iter().any(|m| m == name)).then(|| name.to_owned())
    }

    fn set_f32(&mut self, location: &Self::Location, value: f32) {
        self.uploads.push(Upload::Float(location.clone(), value));
    }

    fn set_i32(&mut self, location: &Self::Location, value: i32) {
        self.uploads.push(Upload::Int(location.clone(), value));
    }

    fn set_f32_array(&mut self, location: &Self::Location, values: &[f32]) {
        self.uploads.push(Upload::Array(location.clone(), values.to_vec()));
    }
}
