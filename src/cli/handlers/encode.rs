use crate::cli::{
    args::EncodeArgs,
    commands::{effective_max_size, read_text_input, write_text_output},
    global::GlobalArgs,
};
use base64url_cookie::{CookieEncoding, Settings, is_cookie_safe};

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_size = effective_max_size(global, settings.max_size);
    let input_text = read_text_input(args.file.as_ref(), global, max_size)?;

    let encoding = args
        .encoding
        .map(CookieEncoding::from)
        .unwrap_or(settings.cookie_encoding);

    let encoded = encoding.encode_value(&input_text)?;

    // Raw values are stored as-is, so flag anything a cookie may not carry
    if encoding == CookieEncoding::Raw && !global.quiet && !is_cookie_safe(&encoded) {
        eprintln!(
            "Warning: raw value contains characters not allowed in a cookie value; use --encoding base64url"
        );
    }

    write_text_output(args.output.as_ref(), &encoded, "\n")
}
