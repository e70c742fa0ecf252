//! Built-in command table.

/// A command the VM implements directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Write the stack to the dump sink. Stack unchanged.
    Dump,
    /// `a` → `a, a`
    Dup,
    /// `a` → `-a`
    Chs,
    /// `a, b` → `a + b`
    Add,
    /// `a, b` → `a - b`
    Sub,
    /// `a, b` → `a * b`
    Mul,
    /// `a, b` → `a / b`, truncating. Zero divisor is a runtime error.
    Div,
    /// `a, b` → `a, b, a, b`
    Dupc,
    /// `a, b` → `b, a`
    Swap,
    /// `a, b, c` → `a + c, b + c`
    AddXy,
    /// `a, b, c` → `a - c, b - c`
    SubXy,
}

/// All built-ins, in definition order.
pub const ALL_BUILTINS: [Builtin; 11] = [
    Builtin::Dump,
    Builtin::Dup,
    Builtin::Chs,
    Builtin::Add,
    Builtin::Sub,
    Builtin::Mul,
    Builtin::Div,
    Builtin::Dupc,
    Builtin::Swap,
    Builtin::AddXy,
    Builtin::SubXy,
];

/// Name of the parameter lookup command, which is handled outside the table.
pub const GET_PARAMETER: &str = "get-parameter";

impl Builtin {
    /// The command name used in source text.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Dump => "dump",
            Builtin::Dup => "dup",
            Builtin::Chs => "chs",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Dupc => "dupc",
            Builtin::Swap => "swap",
            Builtin::AddXy => "+xy",
            Builtin::SubXy => "-xy",
        }
    }

    /// Look up a built-in by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BUILTINS.iter().find(|b| b.name() == name).copied()
    }

    /// Number of values popped and pushed.
    pub fn arity(self) -> (usize, usize) {
        match self {
            Builtin::Dump => (0, 0),
            Builtin::Dup => (1, 2),
            Builtin::Chs => (1, 1),
            Builtin::Add | Builtin::Sub | Builtin::Mul | Builtin::Div => (2, 1),
            Builtin::Dupc => (2, 4),
            Builtin::Swap => (2, 2),
            Builtin::AddXy | Builtin::SubXy => (3, 2),
        }
    }
}
