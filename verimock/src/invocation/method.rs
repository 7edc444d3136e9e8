use std::any::{type_name, TypeId};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Identity of a mocked method.
///
/// A method is identified by its name, the type that declares it (usually the
/// mocked trait) and the ordered types of its parameters. Two methods are
/// only equal if all three parts are equal.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    name: &'static str,
    declaring_type: DeclaringType,
    parameter_types: Vec<&'static str>,
}

impl Method {
    /// Create a new method called `name` that is declared by the type `D`
    /// and does not take any parameters.
    pub fn new<D: ?Sized + 'static>(name: &'static str) -> Self {
        Self {
            name,
            declaring_type: DeclaringType::of::<D>(),
            parameter_types: Vec::new(),
        }
    }

    /// Add a parameter of type `P` to the end of the parameter list.
    pub fn param<P: ?Sized>(mut self) -> Self {
        self.parameter_types.push(type_name::<P>());

        self
    }

    /// Name of the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type that declares the method.
    #[must_use]
    pub fn declaring_type(&self) -> &DeclaringType {
        &self.declaring_type
    }

    /// Type names of the parameters of the method.
    #[must_use]
    pub fn parameter_types(&self) -> &[&'static str] {
        &self.parameter_types
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

/// Type that declares a [`Method`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclaringType {
    id: TypeId,
    name: &'static str,
}

impl DeclaringType {
    /// Get the declaring type for `D`.
    #[must_use]
    pub fn of<D: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<D>(),
            name: type_name::<D>(),
        }
    }

    /// Name of the declaring type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Display for DeclaringType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}
