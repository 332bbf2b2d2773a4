/// Generates an opaque token type, used by the scene builder to hand out stable references to stored components
///
/// Tokens hold the id of the builder that created them, and an index into that builder's storage. Components are
/// never removed or reordered, so a token stays valid for as long as the builder (and the scene built from it) does,
/// no matter how much the storage grows afterwards.
macro_rules! generate_component_token {
    ($token_type:ident for $inst_type:ty) => {
        #[doc = concat!(
            "An identifier used as a reference for a [", stringify!($inst_type), "], stored inside a scene.\n\n",
            "See [crate::scene::SceneBuilder] for details on tokens"
        )]
        #[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, valuable::Valuable)]
        pub struct $token_type {
            pub(crate) builder: $crate::core::types::IdToken,
            pub(crate) index: $crate::core::types::IdToken,
        }

        impl $token_type {
            /// The position of the component inside its collection
            pub fn index(self) -> usize { self.index }
        }

        impl std::fmt::Display for $token_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{name}#{builder:X}:{id:>0width$X}",
                    name = stringify!($token_type),
                    builder = self.builder,
                    id = self.index,
                    width = $crate::core::types::IdToken::BITS as usize / 4
                )
            }
        }
    };
}

// Export
pub(crate) use generate_component_token;
