//! Operator matching helpers.
//!
//! `>`-started operators span several tokens (see [`GtOperator`]), so the
//! helpers here report how many tokens an operator occupies.

use flare_ir::TokenKind;

use crate::cursor::GtOperator;
use crate::recovery::ASSIGNMENT_OPERATORS;
use crate::Parser;

impl Parser<'_> {
    /// Priority of the binary operator at the current token, if any.
    ///
    /// 0 `|| ??`, 1 `&&`, 2 `|`, 3 `^`, 4 `&`, 5 equality, 6 relational,
    /// 7 shifts, 8 additive, 9 multiplicative, 10 `is as`.
    pub(super) fn binary_priority(&self) -> Option<u8> {
        let priority = match self.current_kind() {
            TokenKind::PipePipe | TokenKind::QuestionQuestion => 0,
            TokenKind::AmpAmp => 1,
            TokenKind::Pipe => 2,
            TokenKind::Caret => 3,
            TokenKind::Amp => 4,
            TokenKind::EqEq | TokenKind::NotEq | TokenKind::EqEqEq | TokenKind::NotEqEq => 5,
            TokenKind::Lt | TokenKind::LtEq | TokenKind::Instanceof => 6,
            TokenKind::In if self.context().allows_in() => 6,
            TokenKind::Gt => match self.gt_operator() {
                Some(GtOperator::Gt | GtOperator::GtEq) => 6,
                Some(GtOperator::Shr | GtOperator::UShr) => 7,
                _ => return None,
            },
            TokenKind::Shl => 7,
            TokenKind::Plus | TokenKind::Minus => 8,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => 9,
            TokenKind::Is | TokenKind::As => 10,
            _ => return None,
        };
        Some(priority)
    }

    /// Consume the binary operator at the current token.
    pub(super) fn bump_binary_operator(&mut self) {
        let len = self.gt_operator().map_or(1, GtOperator::token_count);
        self.bump_n(len);
    }

    /// Number of tokens of the assignment operator at the current token.
    pub(super) fn assignment_operator_len(&self) -> Option<usize> {
        if self.at_set(ASSIGNMENT_OPERATORS) {
            return Some(1);
        }
        self.gt_operator()
            .filter(|op| op.is_assignment())
            .map(GtOperator::token_count)
    }
}
