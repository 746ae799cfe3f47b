// switch.rs - Whole-model material swaps with revert-to-original

use std::rc::Rc;

use super::Material;

/// What a selection resolves to
#[derive(Debug, Clone)]
pub enum MaterialChoice {
    Original,
    Preset(Rc<Material>),
}

/// One selectable palette entry
#[derive(Debug, Clone)]
pub struct Swatch {
    pub key: &'static str,
    pub label: &'static str,
    pub choice: MaterialChoice,
}

/// Ordered list of swatches for one scene
#[derive(Debug, Clone, Default)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original(mut self, key: &'static str, label: &'static str) -> Self {
        self.swatches.push(Swatch { key, label, choice: MaterialChoice::Original });
        self
    }

    pub fn preset(mut self, key: &'static str, label: &'static str, m: Rc<Material>) -> Self {
        self.swatches.push(Swatch { key, label, choice: MaterialChoice::Preset(m) });
        self
    }

    pub fn get(&self, key: &str) -> Option<&Swatch> {
        self.swatches.iter().find(|s| s.key == key)
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

/// Per-mesh material association for one loaded model.
/// Originals are captured once, at load time.
#[derive(Debug, Clone)]
pub struct ModelMaterials {
    originals: Vec<Rc<Material>>,
    current: Vec<Rc<Material>>,
}

impl ModelMaterials {
    pub fn capture(originals: Vec<Rc<Material>>) -> Self {
        let current = originals.clone();
        Self { originals, current }
    }

    /// Total and immediate: every mesh changes before this returns
    pub fn apply(&mut self, choice: &MaterialChoice) {
        match choice {
            MaterialChoice::Original => self.current.clone_from(&self.originals),
            MaterialChoice::Preset(m) => {
                for slot in &mut self.current {
                    *slot = Rc::clone(m);
                }
            }
        }
    }

    pub fn current(&self) -> &[Rc<Material>] {
        &self.current
    }

    pub fn originals(&self) -> &[Rc<Material>] {
        &self.originals
    }

    pub fn mesh_count(&self) -> usize {
        self.originals.len()
    }
}
