use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Reads the whole input as text, from `file` or stdin, enforcing the size
/// limit. A limit of 0 disables the check.
pub fn read_text_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    max_size: usize,
) -> Result<String, Box<dyn std::error::Error>> {
    let data = if let Some(file_path) = file {
        // Check file size before reading it
        if max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, max_size
                    )
                    .into());
                }
            }
        }

        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        // Check stdin size after reading
        if max_size > 0 && buffer.len() > max_size && !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                max_size
            )
            .into());
        }

        buffer
    };

    String::from_utf8(data).map_err(|e| {
        format!(
            "Input is not valid UTF-8 text (invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        )
        .into()
    })
}

/// Writes `text` to `output`, or to stdout followed by `terminator`.
pub fn write_text_output(
    output: Option<&PathBuf>,
    text: &str,
    terminator: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        fs::write(output_path, text.as_bytes())?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(terminator.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

/// Effective size limit: the CLI flag wins over the configured value.
pub fn effective_max_size(global: &GlobalArgs, configured: usize) -> usize {
    global.max_size.unwrap_or(configured)
}
