//! Markdown reference renderer.
//!
//! Output is a table of contents followed by one section per function, both
//! in ascending name order. Blocks are joined with a single newline; most
//! blocks carry their own trailing newline to produce the blank lines.

use crate::model::{FunctionRecord, Records};
use crate::sanitize::{sanitize, Mode};
use crate::toc;

/// Render all records into one markdown document.
pub fn render(records: &Records) -> String {
    let mut lines: Vec<String> = Vec::new();

    for name in records.keys() {
        lines.push(toc::render_toc_item(name));
    }
    lines.push("\n***\n".to_string());

    for record in records.values() {
        render_function(&mut lines, record);
    }

    lines.join("\n")
}

/// Render a single function's documentation block.
fn render_function(lines: &mut Vec<String>, func: &FunctionRecord) {
    lines.push(format!("#### `{}`\n", func.name));

    if !func.description.is_empty() {
        lines.push(format!("{}\n", sanitize(&func.description.join(" "), Mode::Full)));
    }

    lines.push("**Usage**\n".to_string());
    lines.push(shell_block(&func.usage));

    if !func.arguments.is_empty() {
        lines.push("**Arguments**\n".to_string());
        for arg in &func.arguments {
            lines.push(format!("- {}\n    - {}", arg.name, arg.description));
        }
        lines.push(String::new());
    }

    if !func.examples.is_empty() {
        lines.push("**Examples**\n".to_string());
        lines.push(shell_block(&func.examples.join("\n")));
    }
}

fn shell_block(body: &str) -> String {
    format!("```shell\n{body}\n```\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::bash::parse;

    #[test]
    fn full_function_block() {
        let records = parse(
            "greet() {\n  ##D Prints a\n  ##D greeting\n  ##A name=the person\n  ##E greet Alice\n  ##E greet  Bob\n}\n",
        )
        .unwrap();

        let expected = "\
- [`greet`](#greet)

***

#### `greet`

Prints a greeting

**Usage**

```shell
greet
```

**Arguments**

- name
    - the person

**Examples**

```shell
greet Alice
greet  Bob
```
";
        assert_eq!(render(&records), expected);
    }

    #[test]
    fn optional_sections_are_omitted() {
        let records = parse("bare() {\n}\n").unwrap();
        let expected = "\
- [`bare`](#bare)

***

#### `bare`

**Usage**

```shell
bare
```
";
        assert_eq!(render(&records), expected);
    }

    #[test]
    fn functions_are_sorted_by_name() {
        let records = parse("zeta() {\n}\nalpha() {\n}\nmid() {\n}\n").unwrap();
        let out = render(&records);
        assert!(out.starts_with("- [`alpha`](#alpha)\n- [`mid`](#mid)\n- [`zeta`](#zeta)\n"));
        let a = out.find("#### `alpha`").unwrap();
        let m = out.find("#### `mid`").unwrap();
        let z = out.find("#### `zeta`").unwrap();
        assert!(a < m && m < z);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let one = parse("b() {\n  ##D bee\n}\na() {\n  ##C -x\n}\n").unwrap();
        let two = parse("a() {\n  ##C -x\n}\nb() {\n  ##D bee\n}\n").unwrap();
        assert_eq!(render(&one), render(&two));
    }

    #[test]
    fn empty_records() {
        assert_eq!(render(&Records::new()), "\n***\n");
    }
}
