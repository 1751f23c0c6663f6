//! Built-in combiners known to the evaluator.
//!
//! [`Form`]s are the operatives the evaluator implements itself (they need
//! the calling environment or participate in suspension). [`Primitive`]s are
//! plain native functions over already evaluated arguments.

/// Built-in operative.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    Def,
    If,
    Vau,
    Eval,
    Begin,
    Loop,
    Catch,
    Throw,
    Finally,
    DNew,
    DLet,
    DRef,
    PushPrompt,
    TakeSubcont,
    PushSubcont,
}

impl Form {
    pub const ALL: [Form; 15] = [
        Form::Def,
        Form::If,
        Form::Vau,
        Form::Eval,
        Form::Begin,
        Form::Loop,
        Form::Catch,
        Form::Throw,
        Form::Finally,
        Form::DNew,
        Form::DLet,
        Form::DRef,
        Form::PushPrompt,
        Form::TakeSubcont,
        Form::PushSubcont,
    ];

    /// Name the form is bound to in the root environment.
    pub const fn name(self) -> &'static str {
        match self {
            Form::Def => "def",
            Form::If => "if",
            Form::Vau => "vau",
            Form::Eval => "eval",
            Form::Begin => "begin",
            Form::Loop => "loop1",
            Form::Catch => "catch*",
            Form::Throw => "throw*",
            Form::Finally => "finally",
            Form::DNew => "dnew",
            Form::DLet => "dlet*",
            Form::DRef => "dref",
            Form::PushPrompt => "push-prompt*",
            Form::TakeSubcont => "take-subcont*",
            Form::PushSubcont => "push-subcont*",
        }
    }

    /// Whether the root binding wraps the form in an applicative.
    pub const fn is_wrapped(self) -> bool {
        !matches!(
            self,
            Form::Def | Form::If | Form::Vau | Form::Begin | Form::Loop | Form::Finally
        )
    }
}

/// Accepted argument counts of a primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::Range(lo, hi) => count >= lo && count <= hi,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::Range(lo, hi) => write!(f, "{lo} to {hi}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

macro_rules! primitives {
    ($($variant:ident => $name:literal, $arity:expr;)*) => {
        /// Native primitive, bound wrapped in an applicative.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum Primitive {
            $($variant,)*
        }

        impl Primitive {
            pub const ALL: &'static [Primitive] = &[$(Primitive::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Primitive::$variant => $name,)*
                }
            }

            pub const fn arity(self) -> Arity {
                match self {
                    $(Primitive::$variant => $arity,)*
                }
            }
        }
    };
}

primitives! {
    // Combiners and environments
    Wrap => "wrap", Arity::Exact(1);
    Unwrap => "unwrap", Arity::Exact(1);
    Eq => "eq?", Arity::Exact(2);
    Cons => "cons", Arity::Exact(2);
    ListStar => "list*", Arity::AtLeast(0);
    MakeEnvironment => "make-environment", Arity::Range(0, 1);
    IsDefined => "defined?", Arity::Exact(2);
    MakeMacro => "macro", Arity::Exact(1);
    // Host interaction
    Display => "display", Arity::Exact(1);
    Log => "log", Arity::Exact(1);
    ReadFromString => "read-from-string", Arity::Exact(1);
    Fail => "fail", Arity::Exact(1);
    CurrentMilliseconds => "current-milliseconds", Arity::Exact(0);
    // Numbers
    NumEq => "num=", Arity::Exact(2);
    NumLt => "num<", Arity::Exact(2);
    Add => "+", Arity::Exact(2);
    Sub => "-", Arity::Exact(2);
    Mul => "*", Arity::Exact(2);
    Div => "/", Arity::Exact(2);
    Rem => "%", Arity::Exact(2);
    StringToNumber => "string->number", Arity::Exact(1);
    NumberToString => "number->string", Arity::Exact(1);
    // Strings and symbols
    StrEq => "str=", Arity::Exact(2);
    StrCat => "strcat", Arity::AtLeast(0);
    StrPrint => "str-print", Arity::Exact(1);
    StringToSymbol => "string->symbol", Arity::Exact(1);
    SymbolToString => "symbol->string", Arity::Exact(1);
    // Vectors
    Vector => "vector", Arity::AtLeast(0);
    VectorRef => "vector-ref", Arity::Exact(2);
    VectorSet => "vector-set!", Arity::Exact(3);
    VectorLength => "vector-length", Arity::Exact(1);
    // Hashtables
    MakeIdentityTable => "make-identity-hashtable", Arity::Exact(0);
    IdentityTablePut => "identity-hashtable-put!", Arity::Exact(3);
    IdentityTableGet => "identity-hashtable-get", Arity::Exact(3);
    MakeStringTable => "make-string-hashtable", Arity::Exact(0);
    StringTablePut => "string-hashtable-put!", Arity::Exact(3);
    StringTableGet => "string-hashtable-get", Arity::Exact(3);
    IdentityHashCode => "identity-hash-code", Arity::Exact(1);
    // User types
    MakeType => "make-type", Arity::Exact(0);
    TypeOf => "type-of", Arity::Exact(1);
    Label => "label", Arity::Exact(1);
    SetLabel => "set-label!", Arity::Exact(2);
    PutMethod => "put-method!", Arity::Exact(3);
    FindMethod => "find-method", Arity::Exact(3);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn builtin_names_are_unique() {
        let mut seen = FxHashSet::default();
        for form in Form::ALL {
            assert!(seen.insert(form.name()), "duplicate {}", form.name());
        }
        for prim in Primitive::ALL {
            assert!(seen.insert(prim.name()), "duplicate {}", prim.name());
        }
    }

    #[test]
    fn arity_bounds() {
        assert!(Arity::Exact(2).accepts(2));
        assert!(!Arity::Exact(2).accepts(3));
        assert!(Arity::Range(0, 1).accepts(0));
        assert!(!Arity::Range(0, 1).accepts(2));
        assert!(Arity::AtLeast(0).accepts(7));
        assert_eq!(Arity::Range(0, 1).to_string(), "0 to 1");
    }

    #[test]
    fn operatives_are_unwrapped() {
        assert!(!Form::If.is_wrapped());
        assert!(!Form::Finally.is_wrapped());
        assert!(Form::PushPrompt.is_wrapped());
        assert!(Form::Eval.is_wrapped());
    }
}
