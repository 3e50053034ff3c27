// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::Value;

/// Scopes are shared: a function value keeps its defining scope alive past
/// the call frame that created it, and every closure over the same frame
/// observes the same bindings.
pub type ScopeRef = Rc<RefCell<Scope>>;

#[derive(Default, Debug)]
pub struct Scope {
    pub parent: Option<ScopeRef>,
    pub bindings: HashMap<String, Value>,
}

impl Scope {
    #[must_use]
    pub fn new_top_level() -> ScopeRef {
        Rc::new(RefCell::new(Self::default()))
    }

    #[must_use]
    pub fn new_enclosed(parent: &ScopeRef) -> ScopeRef {
        Rc::new(RefCell::new(Self {
            parent: Some(Rc::clone(parent)),
            bindings: HashMap::new(),
        }))
    }

    /// The nearest enclosing binding, walking the parent chain.
    #[must_use]
    pub fn find(&self, reference: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(reference) {
            return Some(value.clone());
        }

        if let Some(parent) = self.parent.as_ref() {
            return parent.borrow().find(reference);
        }

        None
    }

    /// Creates or overwrites the binding in this frame. `let` and assignment
    /// both write locally, never into a parent frame.
    pub fn set(&mut self, reference: impl Into<String>, value: Value) {
        self.bindings.insert(reference.into(), value);
    }
}
