use crate::error;
use crate::lang::{Error, VarType};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are case-sensitive. The declared kind is kept for listings only;
/// values are never narrowed, so a `uint8_t` assigned 300 holds 300.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, (VarType, f64)>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).map(|(_, value)| *value)
    }

    pub fn var_type(&self, var_name: &str) -> Option<VarType> {
        self.vars.get(var_name).map(|(var_type, _)| *var_type)
    }

    /// Binds a new variable or rebinds an existing one, kind included.
    pub fn declare(&mut self, var_type: VarType, var_name: &Rc<str>, value: f64) -> Result<()> {
        if self.vars.len() > u16::MAX as usize && !self.vars.contains_key(var_name) {
            return Err(error!(InternalError; "TOO MANY VARIABLES"));
        }
        match self.vars.get_mut(var_name) {
            Some(var) => *var = (var_type, value),
            None => {
                self.vars.insert(var_name.clone(), (var_type, value));
            }
        };
        Ok(())
    }
}
