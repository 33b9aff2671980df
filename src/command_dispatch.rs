//! Purpose: Hold top-level CLI command dispatch for `jsontree`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Inputs load through the shared `Loader` (files and URLs alike).
//! Invariants: `merge` folds inputs left to right; the first input is the base.

use super::*;

pub(super) fn dispatch_command(
    command: Command,
    loader: &Loader,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Merge {
            inputs,
            style,
            output,
        } => {
            let merged = merge_inputs(loader, &inputs)?;
            let style = WriteStyle::from(style);
            match output {
                Some(path) => merged.save(&path, style)?,
                None => emit_document(merged.value(), style, color_mode),
            }
            Ok(RunOutcome::ok())
        }
        Command::Show { input, style } => {
            let document = loader.open(&input)?;
            emit_document(document.value(), style.into(), color_mode);
            Ok(RunOutcome::ok())
        }
        Command::Kind {
            input,
            pointer,
            json,
        } => {
            let document = loader.open(&input)?;
            let target = match pointer.as_deref() {
                Some(pointer) => document.pointer(pointer).ok_or_else(|| {
                    Error::new(ErrorKind::NotFound)
                        .with_message(format!("no member at pointer {pointer}"))
                        .with_hint("Pointers look like /key/0/child; use \"\" for the root.")
                })?,
                None => document.value(),
            };
            let name = jsontree::api::ValueKind::of(target).as_str();
            if json {
                emit_document(&json!({ "kind": name }), WriteStyle::Compact, color_mode);
            } else {
                println!("{name}");
            }
            Ok(RunOutcome::ok())
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "jsontree", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
    }
}

fn merge_inputs(loader: &Loader, inputs: &[String]) -> Result<Document, Error> {
    let mut documents = loader.open_all(inputs.iter().map(String::as_str))?.into_iter();
    let Some(mut base) = documents.next() else {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("merge requires at least one input")
            .with_hint("Use `jsontree merge <base> <overlay>...`."));
    };
    let overlays: Vec<Document> = documents.collect();
    merge_all(base.value_mut(), overlays.iter().map(Document::value));
    Ok(base)
}
