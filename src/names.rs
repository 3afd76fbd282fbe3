//! Pre-built instances of common media types.
//!
//! Each constant holds a fully constructed [`MediaType`] in canonical
//! form, built lazily on first use.
//!
//! ```
//! use mediatype::names;
//!
//! assert_eq!(names::APPLICATION_JSON.to_string(), "application/json");
//! assert!(names::STAR_STAR.is_compatible(&names::IMAGE_PNG));
//! ```

use std::sync::LazyLock;

use crate::media_type::MediaType;
use crate::params::Params;

macro_rules! well_known {
    ($( $(#[$meta:meta])* $name:ident: $type_:literal, $subtype:literal $(, $pname:literal = $pvalue:literal)* ; )+) => {
        $(
            $(#[$meta])*
            pub static $name: LazyLock<MediaType> = LazyLock::new(|| {
                #[allow(unused_mut)]
                let mut params = Params::new();
                $( params.insert($pname, $pvalue); )*
                MediaType::from_valid_parts($type_, $subtype, params)
            });
        )+

    };
}

well_known! {
    /// `*/*`
    STAR_STAR: "*", "*";
    /// `application/json`
    APPLICATION_JSON: "application", "json";
    /// `application/xml`
    APPLICATION_XML: "application", "xml";
    /// `application/pdf`
    APPLICATION_PDF: "application", "pdf";
    /// `application/postscript`
    APPLICATION_POSTSCRIPT: "application", "postscript";
    /// `text/html`
    TEXT_HTML: "text", "html";
    /// `text/plain`
    TEXT_PLAIN: "text", "plain";
    /// `text/plain;charset=utf-8`
    TEXT_PLAIN_UTF_8: "text", "plain", "charset" = "utf-8";
    /// `image/png`
    IMAGE_PNG: "image", "png";
    /// `image/jpeg`
    IMAGE_JPEG: "image", "jpeg";
    /// `image/gif`
    IMAGE_GIF: "image", "gif";
    /// `image/tiff`
    IMAGE_TIFF: "image", "tiff";
    /// `image/bmp`
    IMAGE_BMP: "image", "bmp";
}
