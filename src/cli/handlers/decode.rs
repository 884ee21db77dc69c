use crate::cli::{
    args::DecodeArgs,
    commands::{effective_max_size, read_text_input, write_text_output},
    global::GlobalArgs,
};
use base64url_cookie::{CookieEncoding, Settings};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_size = effective_max_size(global, settings.max_size);
    let input_text = read_text_input(args.file.as_ref(), global, max_size)?;

    let encoding = args
        .encoding
        .map(CookieEncoding::from)
        .unwrap_or(settings.cookie_encoding);

    // Raw values only lose the newline `encode` appends; Base64-URL input
    // skips ASCII whitespace on its own
    let stored = match encoding {
        CookieEncoding::Raw => input_text.strip_suffix('\n').unwrap_or(&input_text),
        CookieEncoding::Base64Url => input_text.as_str(),
    };

    let decoded = encoding.decode_value(stored)?;

    write_text_output(args.output.as_ref(), &decoded, "")
}
