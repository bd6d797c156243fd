//! Node kinds of the concrete syntax tree.

use std::fmt;

/// Grammar category of a tree node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum NodeKind {
    /// Default root of a whole-file parse.
    File,
    /// Error node: carries a message, may wrap the tokens it skipped.
    Error,

    // Attributes and directives
    AttributeList,
    Attribute,
    AttributeNameValuePair,
    ConditionalCompileVariableReference,
    ConditionalCompileBlock,
    NamespaceDeclaration,
    UseNamespaceDirective,
    IncludeDirective,
    ImportStatement,
    PackageStatement,
    GotoStatement,

    // Declarations
    Class,
    ExtendsList,
    ImplementsList,
    ReferenceListMember,
    Function,
    FunctionExpression,
    ParameterList,
    Parameter,
    VarStatement,
    Variable,
    LocalVariable,

    // Types
    Type,
    GenericSignature,

    // Statements
    BlockStatement,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    ForStatement,
    ForInStatement,
    WhileStatement,
    DoWhileStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    CaseClause,
    ThrowStatement,
    TryStatement,
    CatchBlock,
    DebuggerStatement,
    LabeledStatement,

    // Expressions
    ReferenceExpression,
    NamespaceReference,
    ThisExpression,
    SuperExpression,
    LiteralExpression,
    ParenthesizedExpression,
    ArrayLiteralExpression,
    EmptyExpression,
    ObjectLiteralExpression,
    Property,
    FunctionProperty,
    ComputedName,
    SpreadExpression,
    CallExpression,
    NewExpression,
    IndexedPropertyAccessExpression,
    BindExpression,
    ArgumentList,
    FilterQueryArgumentList,
    AssignmentExpression,
    DefinitionExpression,
    ConditionalExpression,
    BinaryExpression,
    PrefixExpression,
    PostfixExpression,
    CommaExpression,
    EmbeddedExpression,

    // E4X
    XmlLiteralExpression,
    XmlTag,
    XmlText,
    XmlAttribute,
    XmlAttributeValue,
}

impl NodeKind {
    /// Statement-level nodes (used by hosts for outline and folding).
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::BlockStatement
                | NodeKind::EmptyStatement
                | NodeKind::ExpressionStatement
                | NodeKind::IfStatement
                | NodeKind::ForStatement
                | NodeKind::ForInStatement
                | NodeKind::WhileStatement
                | NodeKind::DoWhileStatement
                | NodeKind::ContinueStatement
                | NodeKind::BreakStatement
                | NodeKind::ReturnStatement
                | NodeKind::WithStatement
                | NodeKind::SwitchStatement
                | NodeKind::ThrowStatement
                | NodeKind::TryStatement
                | NodeKind::DebuggerStatement
                | NodeKind::LabeledStatement
                | NodeKind::VarStatement
                | NodeKind::ImportStatement
                | NodeKind::PackageStatement
                | NodeKind::GotoStatement
                | NodeKind::ConditionalCompileBlock
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
