//! Element constructor contract
//!
//! An element type declares its constructor as a [`Signature`]: an ordered
//! list of [`Param`]s, each with a type designator and an optional default.
//! Specifications are bound against the signature into [`Arguments`], which
//! the element's [`Element::construct`] turns into an instance.
//!
//! ## Binding Rules
//!
//! - Positional arguments fill parameters in order; surplus arguments are rejected
//! - Named arguments must name a declared parameter
//! - Every parameter without a default must be bound
//! - Every bound argument must match its designator exactly (no coercion)
//!
//! Arity is checked for all parameters before any argument type is checked.

use indexmap::IndexMap;
use std::collections::HashSet;
use typed_array_core::{Error, Nominal, Result, TypeDesignator, Value};

/// A type that typed containers can hold
///
/// # Example
///
/// ```
/// use typed_array_collection::{Arguments, Element, Param, Signature};
/// use typed_array_core::{Fields, Nominal, PrimitiveKind, Result, Value};
///
/// #[derive(Debug, Clone)]
/// struct Foo { id: i64, name: String }
///
/// impl Nominal for Foo {
///     const TYPE_NAME: &'static str = "Foo";
///
///     fn fields(&self) -> Fields {
///         let mut fields = Fields::new();
///         fields.insert("id".to_string(), Value::Int(self.id));
///         fields.insert("name".to_string(), Value::String(self.name.clone()));
///         fields
///     }
/// }
///
/// impl Element for Foo {
///     fn signature() -> Signature {
///         Signature::new([
///             Param::required("id", PrimitiveKind::Integer),
///             Param::required("name", PrimitiveKind::String),
///         ])
///     }
///
///     fn construct(mut args: Arguments) -> Result<Self> {
///         Ok(Foo { id: args.int("id")?, name: args.string("name")? })
///     }
/// }
/// ```
pub trait Element: Nominal + Clone {
    /// Constructor parameters, in positional order
    fn signature() -> Signature;

    /// Build an instance from arguments already bound and type-checked
    /// against [`Element::signature`]
    fn construct(args: Arguments) -> Result<Self>;
}

/// One constructor parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: &'static str,
    designator: TypeDesignator,
    default: Option<Value>,
}

impl Param {
    /// Parameter that must be supplied
    pub fn required(name: &'static str, designator: impl Into<TypeDesignator>) -> Self {
        Param {
            name,
            designator: designator.into(),
            default: None,
        }
    }

    /// Parameter that falls back to `default` when not supplied
    pub fn optional(
        name: &'static str,
        designator: impl Into<TypeDesignator>,
        default: impl Into<Value>,
    ) -> Self {
        Param {
            name,
            designator: designator.into(),
            default: Some(default.into()),
        }
    }

    /// Parameter name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Expected type of the argument
    pub fn designator(&self) -> &TypeDesignator {
        &self.designator
    }

    /// Default value, if any
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Whether the parameter must be supplied
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Ordered constructor parameters of an element type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    /// Create a signature from parameters in positional order
    pub fn new(params: impl IntoIterator<Item = Param>) -> Self {
        Signature {
            params: params.into_iter().collect(),
        }
    }

    /// Parameters in positional order
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the constructor takes no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of parameters without a default
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| p.is_required()).count()
    }

    /// Position of a parameter by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    /// Check that the declaration for `element` is well-formed
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the element name is empty, a
    /// parameter name is empty or repeated, or a default does not match its
    /// parameter's designator.
    pub fn check(&self, element: &str) -> Result<()> {
        if element.is_empty() {
            return Err(Error::configuration(
                "element type must declare a non-empty type name",
            ));
        }

        let mut seen = HashSet::with_capacity(self.params.len());
        for param in &self.params {
            if param.name.is_empty() {
                return Err(Error::configuration(format!(
                    "{} declares a parameter with an empty name",
                    element
                )));
            }
            if !seen.insert(param.name) {
                return Err(Error::configuration(format!(
                    "{} declares parameter `{}` more than once",
                    element, param.name
                )));
            }
            if let Some(default) = &param.default {
                param.designator.check(default).map_err(|e| {
                    Error::configuration(format!(
                        "default of parameter `{}` of {} is invalid: {}",
                        param.name, element, e
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Bind positional arguments
    ///
    /// # Errors
    ///
    /// `Error::Arity` for surplus or missing arguments, then
    /// `Error::TypeMismatch` for the first argument of the wrong type.
    pub fn bind_positional(&self, element: &'static str, args: Vec<Value>) -> Result<Arguments> {
        if args.len() > self.params.len() {
            return Err(Error::arity(
                element,
                format!(
                    "too many arguments: at most {} expected, {} given",
                    self.params.len(),
                    args.len()
                ),
            ));
        }

        let mut slots: Vec<Option<Value>> = args.into_iter().map(Some).collect();
        slots.resize(self.params.len(), None);
        self.finish(element, slots)
    }

    /// Bind named arguments
    ///
    /// # Errors
    ///
    /// `Error::Arity` for unknown names or missing arguments, then
    /// `Error::TypeMismatch` for the first argument of the wrong type.
    pub fn bind_named(
        &self,
        element: &'static str,
        args: IndexMap<String, Value>,
    ) -> Result<Arguments> {
        let mut slots: Vec<Option<Value>> = vec![None; self.params.len()];
        for (name, value) in args {
            match self.position(&name) {
                Some(position) => slots[position] = Some(value),
                None => {
                    return Err(Error::arity(
                        element,
                        format!("unknown named parameter `{}`", name),
                    ))
                }
            }
        }
        self.finish(element, slots)
    }

    fn finish(&self, element: &'static str, mut slots: Vec<Option<Value>>) -> Result<Arguments> {
        // Arity first: every required parameter bound, defaults filled in
        let missing: Vec<&str> = self
            .params
            .iter()
            .zip(slots.iter())
            .filter(|(param, slot)| slot.is_none() && param.is_required())
            .map(|(param, _)| param.name)
            .collect();
        if !missing.is_empty() {
            return Err(Error::arity(
                element,
                format!(
                    "too few arguments: {} required, missing {}",
                    self.required_count(),
                    missing
                        .iter()
                        .map(|name| format!("`{}`", name))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }

        let mut values = IndexMap::with_capacity(self.params.len());
        for (param, slot) in self.params.iter().zip(slots.iter_mut()) {
            let value = match slot.take() {
                Some(value) => {
                    param.designator.check(&value).map_err(|e| {
                        e.with_subject(format!("argument `{}` of {}", param.name, element))
                    })?;
                    value
                }
                None => param.default.clone().unwrap_or(Value::Null),
            };
            values.insert(param.name, value);
        }

        Ok(Arguments { element, values })
    }
}

/// Arguments bound to a signature, in parameter order
///
/// Every declared parameter is present and already matches its designator,
/// so the typed accessors only fail when asked for a parameter the
/// signature does not declare, or with a kind other than the declared one.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    element: &'static str,
    values: IndexMap<&'static str, Value>,
}

impl Arguments {
    /// Element type these arguments were bound for
    pub fn element(&self) -> &'static str {
        self.element
    }

    /// Number of bound arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments are bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow an argument
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Iterate over `(name, value)` pairs in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    /// Take an argument out, whatever its kind
    pub fn value(&mut self, name: &str) -> Result<Value> {
        self.values
            .shift_remove(name)
            .ok_or_else(|| self.undeclared(name))
    }

    /// Integer argument
    pub fn int(&self, name: &str) -> Result<i64> {
        let value = self.require(name)?;
        value
            .as_int()
            .ok_or_else(|| self.mismatch(name, "integer", value))
    }

    /// Float argument
    pub fn float(&self, name: &str) -> Result<f64> {
        let value = self.require(name)?;
        value
            .as_float()
            .ok_or_else(|| self.mismatch(name, "float", value))
    }

    /// Boolean argument
    pub fn bool(&self, name: &str) -> Result<bool> {
        let value = self.require(name)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(name, "boolean", value))
    }

    /// Borrowed string argument
    pub fn str(&self, name: &str) -> Result<&str> {
        let value = self.require(name)?;
        value
            .as_str()
            .ok_or_else(|| self.mismatch(name, "string", value))
    }

    /// Owned string argument
    pub fn string(&mut self, name: &str) -> Result<String> {
        match self.value(name)? {
            Value::String(s) => Ok(s),
            other => Err(self.mismatch(name, "string", &other)),
        }
    }

    /// Positional list argument
    pub fn list(&mut self, name: &str) -> Result<Vec<Value>> {
        match self.value(name)? {
            Value::Array(items) => Ok(items),
            other => Err(self.mismatch(name, "array", &other)),
        }
    }

    /// Keyed list or untyped object argument
    pub fn entries(&mut self, name: &str) -> Result<IndexMap<String, Value>> {
        match self.value(name)? {
            Value::Map(entries) | Value::Record(entries) => Ok(entries),
            other => Err(self.mismatch(name, "array", &other)),
        }
    }

    /// Nominal instance argument
    pub fn instance<T: Nominal + Clone>(&self, name: &str) -> Result<T> {
        let value = self.require(name)?;
        value
            .as_instance()
            .and_then(|instance| instance.downcast_ref::<T>())
            .cloned()
            .ok_or_else(|| self.mismatch(name, &format!("instance of {}", T::TYPE_NAME), value))
    }

    fn require(&self, name: &str) -> Result<&Value> {
        self.values.get(name).ok_or_else(|| self.undeclared(name))
    }

    fn undeclared(&self, name: &str) -> Error {
        Error::configuration(format!(
            "{} has no argument `{}` (not declared, or already taken)",
            self.element, name
        ))
    }

    fn mismatch(&self, name: &str, expected: &str, actual: &Value) -> Error {
        Error::type_mismatch(
            format!("argument `{}` of {}", name, self.element),
            expected,
            actual.describe(),
        )
    }
}
