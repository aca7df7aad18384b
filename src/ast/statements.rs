use super::expressions::Expr;

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `if (condition) then_branch else else_branch`
    ///
    /// The else branch is mandatory; the grammar has no optional-else form.
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Box<Stmt>,
    },
    /// `{ stmt* }`: the statements between the braces, in order.
    Block(Vec<Stmt>),
    /// `println(expr);`
    Println(Expr),
}

/// The root of a parse: exactly one top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statement: Stmt,
}
