//! Type formatting for error messages and display.
//!
//! - nullary operators print their name: `int`
//! - binary operators print infix: `(int -> bool)`, `(a * b)`
//! - other operators print prefix: `(list int)`, `(triple a b c)`
//! - unbound variables print a letter derived from their id
//! - bound variables print whatever they are bound to

use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool};

impl Pool {
    /// Format a type as a human-readable string.
    ///
    /// Variable `n` prints as the `n`-th letter; past `z` the letters
    /// repeat with the wrap count appended (`a1`, `b1`, ...), so names stay
    /// unique for the life of the pool.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        self.write_type(idx, buf, &|var_id| var_id as usize);
    }

    /// Format with a caller-chosen ordinal for each unbound variable id.
    pub(crate) fn write_type(&self, idx: Idx, buf: &mut String, ordinal: &dyn Fn(u32) -> usize) {
        ensure_sufficient_stack(|| {
            let idx = self.resolve_readonly(idx);

            if let Some(var_id) = self.var_id(idx) {
                push_var_name(ordinal(var_id), buf);
                return;
            }

            let Some(name) = self.operator_name(idx) else {
                buf.push_str("<unknown>");
                return;
            };

            match self.operator_args(idx).as_slice() {
                [] => buf.push_str(name),
                &[left, right] => {
                    buf.push('(');
                    self.write_type(left, buf, ordinal);
                    buf.push(' ');
                    buf.push_str(name);
                    buf.push(' ');
                    self.write_type(right, buf, ordinal);
                    buf.push(')');
                }
                args => {
                    buf.push('(');
                    buf.push_str(name);
                    for &arg in args {
                        buf.push(' ');
                        self.write_type(arg, buf, ordinal);
                    }
                    buf.push(')');
                }
            }
        });
    }
}

/// Push the display name of the `ordinal`-th variable.
#[allow(clippy::cast_possible_truncation)] // `ordinal % 26` fits in a u8
fn push_var_name(ordinal: usize, buf: &mut String) {
    buf.push(char::from(b'a' + (ordinal % 26) as u8));
    if ordinal >= 26 {
        buf.push_str(&(ordinal / 26).to_string());
    }
}
