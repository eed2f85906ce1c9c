//! The sample programs.
//!
//! Each one exercises a different corner of inference: recursion through
//! `letrec`, let-polymorphism, the monomorphic lambda parameter, an
//! undefined name, the occurs check, an argument that is never used, and
//! function composition.

use milner_ir::{ExprArena, ExprId, StringInterner};

/// A named sample program.
#[derive(Copy, Clone, Debug)]
pub struct Sample {
    pub name: &'static str,
    pub expr: ExprId,
}

/// Builds expressions from identifier spellings.
struct Builder<'a> {
    arena: &'a mut ExprArena,
    interner: &'a StringInterner,
}

impl Builder<'_> {
    fn ident(&mut self, name: &str) -> ExprId {
        self.arena.ident(self.interner.intern(name))
    }

    fn lambda(&mut self, param: &str, body: ExprId) -> ExprId {
        self.arena.lambda(self.interner.intern(param), body)
    }

    fn apply(&mut self, func: ExprId, args: &[ExprId]) -> ExprId {
        self.arena.apply_all(func, args)
    }

    /// `func arg`, both identifiers.
    fn call(&mut self, func: &str, arg: &str) -> ExprId {
        let func = self.ident(func);
        let arg = self.ident(arg);
        self.arena.apply(func, arg)
    }

    fn let_in(&mut self, name: &str, value: ExprId, body: ExprId) -> ExprId {
        self.arena.let_in(self.interner.intern(name), value, body)
    }

    fn letrec_in(&mut self, name: &str, value: ExprId, body: ExprId) -> ExprId {
        self.arena.letrec_in(self.interner.intern(name), value, body)
    }

    /// `pair (f 3) (f true)`
    fn pair_of_uses(&mut self, f: &str) -> ExprId {
        let pair = self.ident("pair");
        let on_int = self.call(f, "3");
        let on_bool = self.call(f, "true");
        self.apply(pair, &[on_int, on_bool])
    }
}

/// Allocate every sample into `arena`, in display order.
pub fn build_samples(arena: &mut ExprArena, interner: &StringInterner) -> Vec<Sample> {
    let mut b = Builder { arena, interner };

    // letrec factorial = λn. cond (zero? n) 1 (times n (factorial (pred n)))
    // in factorial 5
    let factorial = {
        let cond = b.ident("cond");
        let is_zero = b.call("zero?", "n");
        let one = b.ident("1");
        let times = b.ident("times");
        let n = b.ident("n");
        let rec = b.ident("factorial");
        let pred = b.call("pred", "n");
        let recurse = b.apply(rec, &[pred]);
        let product = b.apply(times, &[n, recurse]);
        let branch = b.apply(cond, &[is_zero, one, product]);
        let value = b.lambda("n", branch);
        let body = b.call("factorial", "5");
        b.letrec_in("factorial", value, body)
    };

    // let f = λx. x in pair (f 3) (f true)
    let let_polymorphism = {
        let x = b.ident("x");
        let identity = b.lambda("x", x);
        let body = b.pair_of_uses("f");
        b.let_in("f", identity, body)
    };

    // λx. pair (x 3) (x true)
    let non_generic_param = {
        let body = b.pair_of_uses("x");
        b.lambda("x", body)
    };

    // pair (f 3) (f true)
    let undefined_symbol = b.pair_of_uses("f");

    // λf. f f
    let self_application = {
        let body = b.call("f", "f");
        b.lambda("f", body)
    };

    // let g = λf. 5 in g g
    let unused_argument = {
        let five = b.ident("5");
        let value = b.lambda("f", five);
        let body = b.call("g", "g");
        b.let_in("g", value, body)
    };

    // λf. λg. λarg. f (g arg)
    let compose = {
        let f = b.ident("f");
        let inner = b.call("g", "arg");
        let body = b.apply(f, &[inner]);
        let arg = b.lambda("arg", body);
        let g = b.lambda("g", arg);
        b.lambda("f", g)
    };

    vec![
        Sample {
            name: "factorial",
            expr: factorial,
        },
        Sample {
            name: "let-polymorphism",
            expr: let_polymorphism,
        },
        Sample {
            name: "non-generic-param",
            expr: non_generic_param,
        },
        Sample {
            name: "undefined-symbol",
            expr: undefined_symbol,
        },
        Sample {
            name: "self-application",
            expr: self_application,
        },
        Sample {
            name: "unused-argument",
            expr: unused_argument,
        },
        Sample {
            name: "compose",
            expr: compose,
        },
    ]
}
