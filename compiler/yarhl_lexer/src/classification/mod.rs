//! Semantic classification tags attached to every token.
//!
//! A token can carry more than one tag: a structural tag (`RULE_BODY`,
//! `BOUNDARY_MARKER`) combined with a semantic one (`KEYWORD`,
//! `VALUE_STRING`, ...). Hosts map the set onto their own style vocabulary.

use bitflags::bitflags;

bitflags! {
    /// Set of classification tags for a single token.
    ///
    /// Bits 0-7 are semantic categories, bits 8-11 are value kinds, bits
    /// 12-15 are structural modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Classification: u16 {
        // === Semantic (bits 0-7) ===

        /// `//` line comment or any text inside `/* ... */`.
        const COMMENT = 1 << 0;
        /// Language keyword (`rule`, `import`, condition operators, ...).
        const KEYWORD = 1 << 1;
        /// `meta:`, `strings:` or `condition:` header.
        const SECTION_HEADER = 1 << 2;
        /// `$name` declared in the `strings` section.
        const VARIABLE_DECLARATION = 1 << 3;
        /// `$name` referenced in the `condition` section and declared before.
        const VARIABLE_REFERENCE = 1 << 4;
        /// `$name` referenced in the `condition` section but never declared.
        const VARIABLE_UNDECLARED = 1 << 5;
        /// Key assigned in the `meta` section.
        const IDENTIFIER_DECLARATION = 1 << 6;
        /// Anything without a more specific meaning.
        const PLAIN_TEXT = 1 << 7;

        // === Values (bits 8-11) ===

        const VALUE_NUMERIC = 1 << 8;
        const VALUE_BOOLEAN = 1 << 9;
        /// Brace-delimited byte pattern, including its continuation lines.
        const VALUE_HEX_PATTERN = 1 << 10;
        const VALUE_STRING = 1 << 11;

        // === Structure (bits 12-15) ===

        /// `{` or `}` delimiting a rule body.
        const BOUNDARY_MARKER = 1 << 12;
        /// Consumed inside a rule body.
        const RULE_BODY = 1 << 13;
    }
}

impl Classification {
    /// All value kinds.
    pub const VALUE_MASK: Self = Self::from_bits_truncate(
        Self::VALUE_NUMERIC.bits()
            | Self::VALUE_BOOLEAN.bits()
            | Self::VALUE_HEX_PATTERN.bits()
            | Self::VALUE_STRING.bits(),
    );

    /// Tags that mark a token as the left-hand side of a declaration.
    pub const DECLARATION_MASK: Self = Self::from_bits_truncate(
        Self::VARIABLE_DECLARATION.bits() | Self::IDENTIFIER_DECLARATION.bits(),
    );

    /// Check if the token is an assigned value of any kind.
    #[inline]
    pub const fn is_value(self) -> bool {
        self.intersects(Self::VALUE_MASK)
    }

    /// Check if producing this token recorded a warning.
    #[inline]
    pub const fn is_diagnostic(self) -> bool {
        self.contains(Self::VARIABLE_UNDECLARED)
    }

    /// Check if the token declares a variable or an identifier.
    #[inline]
    pub const fn is_declaration(self) -> bool {
        self.intersects(Self::DECLARATION_MASK)
    }

    /// Check if the token was consumed inside a rule body.
    #[inline]
    pub const fn in_rule_body(self) -> bool {
        self.contains(Self::RULE_BODY)
    }
}
