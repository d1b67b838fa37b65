#[cfg(feature = "core")]
#[doc(inline)]
pub use radix_core as core;

#[cfg(feature = "codec")]
#[doc(inline)]
pub use radix_codec as codec;
