pub mod codec;
pub mod cookie;

mod memory;
pub use memory::MemoryCookies;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod document;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use document::DocumentCookies;

pub use cookie::CookieStore;
