use crate::display;

const HELP: &str = r#"# getDate

Get formatted date values and persist named variables.

**Usage:** `getdate [options] [0|1]`

## Date options

- `/D` day of month (two digits)
- `/DM` month as two digits (only valid with `/D`)
- `/LM` last month name
- `/LQ` last quarter (must be used alone)
- `/LY` last year (4-digit)
- `/M` current month name
- `/NY` next year (must be used alone)
- `/Q` current quarter
- `/T` terminal date format MM/DD/YYYY (must be used alone, reorder with `d-m-y`)
- `/Y` current year (4-digit, or 2-digit with `-t`/`--two-digit`)

Options combine by concatenation, e.g. `/D/M`.

## Flags

- `--full` default format uses YYYY (MM-DD-YYYY)
- `--slash` default format uses `/` instead of `-`
- `--leap` store leap check result in `_checkLeapYear`
- `--clear-var` clear persisted getDate variables
- `-abbrv` abbreviate month name (for `/M`)
- `-t`, `--two-digit` two-digit year with `/Y`
- `--season` use season name with `/Q`
- `-v [var]` with `--slash` default mode, use `_getSlashDate` or a custom variable name
- `/?` show help, `-e` with `/?` shows the edit hint
- `0` / `1` suppress / print computed values
"#;

const EDIT_HINT: &str = "Edit hint: help text lives in src/cli/help.rs";

/// Print the help page, plus the edit hint when asked
pub fn show(edit_hint: bool) {
    display::print_markdown(HELP);
    if edit_hint {
        println!("{}", EDIT_HINT);
    }
}

/// Print only the edit hint
pub fn edit_all() {
    println!("{}", EDIT_HINT);
}
