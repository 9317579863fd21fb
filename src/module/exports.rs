use crate::error::OidResult;
use crate::module::{number_id_hash, object_id_hash, Value};

pub type ModuleFunctionHandler = fn(&[Value]) -> OidResult<Value>;

/// A function exposed to the host under `name`.
#[derive(Clone, Copy)]
pub struct ModuleFunction {
    pub name: &'static str,
    pub handler: ModuleFunctionHandler,
}

impl ModuleFunction {
    pub fn call(&self, args: &[Value]) -> OidResult<Value> {
        (self.handler)(args)
    }
}

static UNDEFINED: Value = Value::Undefined;

/// Functions take exactly one argument. A missing one reads as `undefined`, extra ones are
/// ignored.
fn first_arg(args: &[Value]) -> &Value {
    args.first().unwrap_or(&UNDEFINED)
}

fn object_id_hash_command(args: &[Value]) -> OidResult<Value> {
    object_id_hash(first_arg(args)).map(Value::from)
}

fn number_id_hash_command(args: &[Value]) -> OidResult<Value> {
    number_id_hash(first_arg(args)).map(Value::from)
}

pub static MODULE_FUNCTIONS: [ModuleFunction; 2] = [
    ModuleFunction {
        name: "objectIdHash",
        handler: object_id_hash_command,
    },
    ModuleFunction {
        name: "numberIdHash",
        handler: number_id_hash_command,
    },
];

pub fn find_function(name: &str) -> Option<&'static ModuleFunction> {
    MODULE_FUNCTIONS.iter().find(|f| f.name == name)
}
