//! C-ABI Foreign Function Interface for authorlink.
//!
//! Lets host applications written in C, C++, C#, Swift or anything with C
//! FFI support call the normalizer directly.
//!
//! # Memory Management
//!
//! All strings returned by this library must be freed using `authorlink_free_string`.
//!
//! # Error Handling
//!
//! Functions that can fail return a null pointer on error. Use `authorlink_last_error`
//! to retrieve the error message.
//!
//! # Example (C)
//!
//! ```c
//! #include <stdio.h>
//! #include "authorlink.h"
//!
//! int main() {
//!     char* links = authorlink_link_authors("JOHN DOE1, Jane Smith*", 0);
//!     if (!links) {
//!         fprintf(stderr, "Error: %s\n", authorlink_last_error());
//!         return 1;
//!     }
//!
//!     printf("%s\n", links);  // [John Doe], [Jane Smith]
//!     authorlink_free_string(links);
//!     return 0;
//! }
//! ```

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr, CString};
use std::panic::catch_unwind;
use std::ptr;

use crate::error::Error;
use crate::options::{LinkOptions, LinkStyle};

// Thread-local storage for the last error message.
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message.
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message.
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Flags for link rendering.
pub const AUTHORLINK_STYLE_WIKI: u32 = 1;
pub const AUTHORLINK_STYLE_PLAIN: u32 = 2;
pub const AUTHORLINK_FLAG_NFC: u32 = 4;
pub const AUTHORLINK_FLAG_KEEP_CASE: u32 = 8;

/// JSON format options.
pub const AUTHORLINK_JSON_PRETTY: c_int = 0;
pub const AUTHORLINK_JSON_COMPACT: c_int = 1;

fn options_from_flags(flags: u32) -> LinkOptions {
    let mut options = LinkOptions::default();

    if flags & AUTHORLINK_STYLE_WIKI != 0 {
        options.style = LinkStyle::WikiLink;
    } else if flags & AUTHORLINK_STYLE_PLAIN != 0 {
        options.style = LinkStyle::Plain;
    }
    if flags & AUTHORLINK_FLAG_NFC != 0 {
        options.normalize_unicode = true;
    }
    if flags & AUTHORLINK_FLAG_KEEP_CASE != 0 {
        options.normalize_case = false;
    }

    options
}

/// Hands a Rust string to the caller, or records why it could not.
fn into_c_string(result: std::thread::Result<Result<String, String>>) -> *mut c_char {
    match result {
        Ok(Ok(text)) => match CString::new(text) {
            Ok(s) => s.into_raw(),
            Err(_) => {
                set_last_error("output contains null byte");
                ptr::null_mut()
            }
        },
        Ok(Err(e)) => {
            set_last_error(&e);
            ptr::null_mut()
        }
        Err(_) => {
            set_last_error("panic occurred during normalization");
            ptr::null_mut()
        }
    }
}

/// Get the version of the library.
///
/// # Safety
///
/// Returns a static string that must not be freed.
#[no_mangle]
pub extern "C" fn authorlink_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Get the last error message.
///
/// # Safety
///
/// Returns a pointer to a thread-local error string. The pointer is valid until
/// the next call to any authorlink function on the same thread.
#[no_mangle]
pub extern "C" fn authorlink_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Normalize a null-terminated author list into links.
///
/// # Safety
///
/// - `input` must be a valid null-terminated UTF-8 string.
/// - `flags` is a bitwise OR of `AUTHORLINK_STYLE_*` and `AUTHORLINK_FLAG_*` constants.
/// - Returns null on error. Use `authorlink_last_error` to get the error message.
/// - The returned string must be freed with `authorlink_free_string`.
#[no_mangle]
pub unsafe extern "C" fn authorlink_link_authors(input: *const c_char, flags: u32) -> *mut c_char {
    clear_last_error();

    if input.is_null() {
        set_last_error(&Error::InvalidInput("input is null".into()).to_string());
        return ptr::null_mut();
    }

    let result = catch_unwind(|| -> Result<String, String> {
        let text = CStr::from_ptr(input)
            .to_str()
            .map_err(|e| Error::from(e).to_string())?;
        Ok(crate::link_authors_with_options(text, &options_from_flags(flags)))
    });

    into_c_string(result)
}

/// Normalize an author list given as a UTF-8 byte buffer.
///
/// # Safety
///
/// - `data` must be a valid pointer to a byte buffer of at least `len` bytes.
/// - Returns null on error. Use `authorlink_last_error` to get the error message.
/// - The returned string must be freed with `authorlink_free_string`.
#[no_mangle]
pub unsafe extern "C" fn authorlink_link_authors_bytes(
    data: *const u8,
    len: usize,
    flags: u32,
) -> *mut c_char {
    clear_last_error();

    if data.is_null() {
        set_last_error(&Error::InvalidInput("data is null".into()).to_string());
        return ptr::null_mut();
    }

    let result = catch_unwind(|| -> Result<String, String> {
        let bytes = std::slice::from_raw_parts(data, len);
        let text = std::str::from_utf8(bytes).map_err(|e| Error::from(e).to_string())?;
        Ok(crate::link_authors_with_options(text, &options_from_flags(flags)))
    });

    into_c_string(result)
}

/// Extract clean names as a JSON document (`{"authors": [...], "stats": {...}}`).
///
/// # Safety
///
/// - `input` must be a valid null-terminated UTF-8 string.
/// - `format` is one of `AUTHORLINK_JSON_PRETTY` or `AUTHORLINK_JSON_COMPACT`.
/// - Returns null on error. Use `authorlink_last_error` to get the error message.
/// - The returned string must be freed with `authorlink_free_string`.
#[no_mangle]
pub unsafe extern "C" fn authorlink_extract_json(input: *const c_char, format: c_int) -> *mut c_char {
    clear_last_error();

    if input.is_null() {
        set_last_error(&Error::InvalidInput("input is null".into()).to_string());
        return ptr::null_mut();
    }

    let result = catch_unwind(|| -> Result<String, String> {
        let text = CStr::from_ptr(input)
            .to_str()
            .map_err(|e| Error::from(e).to_string())?;
        let list = crate::extract_authors(text, &LinkOptions::default());
        let json = if format == AUTHORLINK_JSON_COMPACT {
            list.to_json()
        } else {
            list.to_json_pretty()
        };
        json.map_err(|e| e.to_string())
    });

    into_c_string(result)
}

/// Free a string returned by authorlink.
///
/// # Safety
///
/// - `s` must be a valid pointer returned by an authorlink function.
/// - After calling this function, the pointer is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn authorlink_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let text = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
        unsafe { authorlink_free_string(ptr) };
        text
    }

    #[test]
    fn test_version() {
        let version = authorlink_version();
        assert!(!version.is_null());
        let version_str = unsafe { CStr::from_ptr(version) }.to_str().unwrap();
        assert!(!version_str.is_empty());
    }

    #[test]
    fn test_link_authors() {
        let input = CString::new("JOHN DOE1,2†, Jane Smith*").unwrap();
        let links = unsafe { authorlink_link_authors(input.as_ptr(), 0) };
        assert_eq!(take_string(links), "[John Doe], [Jane Smith]");
        assert!(authorlink_last_error().is_null());
    }

    #[test]
    fn test_link_authors_flags() {
        let input = CString::new("JOHN DOE, jane smith").unwrap();
        let links = unsafe {
            authorlink_link_authors(input.as_ptr(), AUTHORLINK_STYLE_WIKI | AUTHORLINK_FLAG_KEEP_CASE)
        };
        assert_eq!(take_string(links), "[[JOHN DOE]], [[jane smith]]");

        let links = unsafe { authorlink_link_authors(input.as_ptr(), AUTHORLINK_STYLE_PLAIN) };
        assert_eq!(take_string(links), "John Doe, Jane Smith");
    }

    #[test]
    fn test_link_authors_null() {
        let links = unsafe { authorlink_link_authors(ptr::null(), 0) };
        assert!(links.is_null());

        let error = authorlink_last_error();
        assert!(!error.is_null());
        let message = unsafe { CStr::from_ptr(error) }.to_str().unwrap();
        assert!(message.contains("input is null"));
    }

    #[test]
    fn test_link_authors_bytes_invalid_utf8() {
        let data = [0x4A, 0xFF, 0x6F];
        let links = unsafe { authorlink_link_authors_bytes(data.as_ptr(), data.len(), 0) };
        assert!(links.is_null());
        assert!(!authorlink_last_error().is_null());
    }

    #[test]
    fn test_link_authors_bytes() {
        let data = "山田 太郎 ∙ 佐藤 花子".as_bytes();
        let links = unsafe { authorlink_link_authors_bytes(data.as_ptr(), data.len(), 0) };
        assert_eq!(take_string(links), "[山田 太郎], [佐藤 花子]");
    }

    #[test]
    fn test_extract_json() {
        let input = CString::new("John Doe, A").unwrap();
        let json = unsafe { authorlink_extract_json(input.as_ptr(), AUTHORLINK_JSON_COMPACT) };
        assert_eq!(
            take_string(json),
            r#"{"authors":["John Doe"],"stats":{"candidates":2,"discarded":1}}"#
        );
    }

    #[test]
    fn test_free_null() {
        // Should not crash
        unsafe {
            authorlink_free_string(ptr::null_mut());
        }
    }
}
