// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interactive line-oriented front end
//!
//! The shell reads one command per line, runs it through the
//! [`Controller`] and prints the outcome. Form fields are separated by `|`:
//!
//! ```text
//! add Soup | 20 | | Hot soup
//! edit 1 | Tomato Soup | 25 | Spain | Blend until smooth
//! ```
//!
//! # Architecture
//! Command lines are parsed with nom combinators into a [`Command`], then
//! executed. Parsing never touches the controller, so malformed input can't
//! change any state.

use colored::Colorize;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, space0, space1},
    combinator::{all_consuming, map, map_res, opt, rest},
    multi::{count, separated_list0, separated_list1},
    sequence::terminated,
    IResult, Parser,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::core::{IngredientSelection, RecipeDraft, RecipeId, RecordFields, StoreError};
use crate::ui::controller::Controller;
use crate::ui::picker::TypedPathPicker;

/// Errors produced while reading a command line
#[derive(Debug, Error, PartialEq)]
pub enum ShellError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("Invalid syntax for '{command}'. Usage: {usage}")]
    InvalidSyntax {
        command: &'static str,
        usage: &'static str,
    },
}

/// A parsed shell command
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add(RecipeDraft),
    List,
    Show(RecipeId),
    /// Edit form; the draft's image is ignored and the current one kept
    Edit(RecipeId, RecipeDraft),
    /// Pick an image for the next new recipe, or for an existing one
    Image(Option<RecipeId>, String),
    Delete(RecipeId),
    Clear,
    Select(Vec<RecipeId>),
    SelectAll,
    Deselect,
    Copy,
    Paste,
    Ingredients,
    Ingredient(String),
    /// Apply catalog entries (by grid index) to a recipe
    Use(RecipeId, Vec<usize>),
    Help,
    Quit,
}

/// Command reference printed by `help`
const USAGE: &[(&str, &str)] = &[
    ("add", "add NAME | MINUTES | ORIGIN | DESCRIPTION"),
    ("list", "list"),
    ("show", "show ID"),
    ("edit", "edit ID | NAME | MINUTES | ORIGIN | DESCRIPTION"),
    ("image", "image [ID] [PATH]"),
    ("delete", "delete ID"),
    ("clear", "clear"),
    ("select", "select ID... | select all"),
    ("deselect", "deselect"),
    ("copy", "copy"),
    ("paste", "paste"),
    ("ingredients", "ingredients"),
    ("ingredient", "ingredient NAME"),
    ("use", "use ID INDEX..."),
    ("help", "help"),
    ("quit", "quit"),
];

fn usage(command: &'static str) -> ShellError {
    let usage = USAGE
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, usage)| *usage)
        .unwrap_or(command);

    ShellError::InvalidSyntax { command, usage }
}

/// Parse a command keyword
pub fn parse_keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic())(input)
}

/// Parse a recipe id
pub fn parse_id(input: &str) -> IResult<&str, RecipeId> {
    map(map_res(digit1, str::parse::<u32>), RecipeId).parse(input)
}

/// Parse one or more space-separated ids
pub fn parse_ids(input: &str) -> IResult<&str, Vec<RecipeId>> {
    separated_list1(space1, parse_id).parse(input)
}

/// Parse zero or more space-separated catalog indices
pub fn parse_indices(input: &str) -> IResult<&str, Vec<usize>> {
    separated_list0(space1, map_res(digit1, str::parse::<usize>)).parse(input)
}

/// Parse the four `|`-separated form fields
///
/// Format: NAME | MINUTES | ORIGIN | DESCRIPTION
///
/// The description takes the rest of the line, so it may contain `|`.
/// A literal `\n` in the description becomes a line break.
pub fn parse_form(input: &str) -> IResult<&str, RecipeDraft> {
    let (input, (fields, description)) = (
        count(terminated(take_while(|c: char| c != '|'), char('|')), 3),
        rest,
    )
        .parse(input)?;

    Ok((
        input,
        RecipeDraft {
            name: fields[0].trim().to_string(),
            cooking_time: fields[1].trim().to_string(),
            origin: fields[2].trim().to_string(),
            description: description.trim().replace("\\n", "\n"),
            image_path: None,
        },
    ))
}

/// Parse: ID | NAME | MINUTES | ORIGIN | DESCRIPTION
fn parse_edit(input: &str) -> IResult<&str, (RecipeId, RecipeDraft)> {
    let (input, id) = parse_id(input)?;
    let (input, _) = (space0, char('|')).parse(input)?;
    let (input, draft) = parse_form(input)?;
    Ok((input, (id, draft)))
}

/// Parse: [ID] PATH
///
/// A lone id targets that recipe with no path, which cancels the change.
fn parse_image(input: &str) -> IResult<&str, (Option<RecipeId>, &str)> {
    alt((
        map(all_consuming(parse_id), |id| (Some(id), "")),
        (opt(terminated(parse_id, space1)), rest),
    ))
    .parse(input)
}

/// Parse: ID INDEX...
fn parse_use(input: &str) -> IResult<&str, (RecipeId, Vec<usize>)> {
    let (input, id) = parse_id(input)?;
    let (input, _) = space0(input)?;
    let (input, indices) = parse_indices(input)?;
    Ok((input, (id, indices)))
}

/// Runs `parser` over the whole argument string
fn arguments<'a, O>(
    command: &'static str,
    input: &'a str,
    parser: impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
) -> Result<O, ShellError> {
    all_consuming(parser)
        .parse(input)
        .map(|(_, output)| output)
        .map_err(|_| usage(command))
}

fn no_arguments(command: &'static str, input: &str, parsed: Command) -> Result<Command, ShellError> {
    if input.is_empty() {
        Ok(parsed)
    } else {
        Err(usage(command))
    }
}

/// Parse a full command line
///
/// Keywords are case-insensitive. Leading and trailing whitespace is ignored.
///
/// # Example
/// ```
/// use recipe_catalog::core::RecipeId;
/// use recipe_catalog::ui::shell::{parse_command, Command};
///
/// assert_eq!(parse_command("show 3"), Ok(Command::Show(RecipeId(3))));
/// ```
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let line = line.trim();
    let (args, keyword) =
        parse_keyword(line).map_err(|_| ShellError::UnknownCommand(line.to_string()))?;
    let args = args.trim();

    match keyword.to_lowercase().as_str() {
        "add" => arguments("add", args, parse_form).map(Command::Add),
        "list" | "ls" => no_arguments("list", args, Command::List),
        "show" => arguments("show", args, parse_id).map(Command::Show),
        "edit" => arguments("edit", args, parse_edit).map(|(id, draft)| Command::Edit(id, draft)),
        "image" => arguments("image", args, parse_image)
            .map(|(id, path)| Command::Image(id, path.trim().to_string())),
        "delete" | "rm" => arguments("delete", args, parse_id).map(Command::Delete),
        "clear" => no_arguments("clear", args, Command::Clear),
        "select" if args.eq_ignore_ascii_case("all") => Ok(Command::SelectAll),
        "select" => arguments("select", args, parse_ids).map(Command::Select),
        "deselect" => no_arguments("deselect", args, Command::Deselect),
        "copy" => no_arguments("copy", args, Command::Copy),
        "paste" => no_arguments("paste", args, Command::Paste),
        "ingredients" => no_arguments("ingredients", args, Command::Ingredients),
        "ingredient" => Ok(Command::Ingredient(args.to_string())),
        "use" => arguments("use", args, parse_use).map(|(id, indices)| Command::Use(id, indices)),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ShellError::UnknownCommand(keyword.to_string())),
    }
}

/// Whether the session should keep reading commands
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented session driving a [`Controller`]
pub struct Shell<'a, R, W> {
    controller: &'a Controller,
    input: R,
    output: W,
    /// Ask before delete and clear
    confirm_destructive: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(controller: &'a Controller, input: R, output: W, confirm_destructive: bool) -> Self {
        Self {
            controller,
            input,
            output,
            confirm_destructive,
        }
    }

    /// Reads and executes commands until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Only I/O failures on the input or output stream end the session;
    /// bad commands are reported and skipped.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{} Recipe catalog ready. Type 'help' for commands.",
            "→".cyan()
        )?;

        while let Some(line) = self.prompt("recipes> ")? {
            if line.trim().is_empty() {
                continue;
            }

            let flow = match parse_command(&line) {
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    self.error(&e.to_string())?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Runs a single parsed command
    pub fn execute(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Add(draft) => self.add(draft)?,
            Command::List => self.list()?,
            Command::Show(id) => self.show(id)?,
            Command::Edit(id, draft) => self.edit(id, draft)?,
            Command::Image(id, path) => self.image(id, &path)?,
            Command::Delete(id) => self.delete(id)?,
            Command::Clear => self.clear()?,
            Command::Select(ids) => self.select(&ids)?,
            Command::SelectAll => {
                self.controller.select_all();
                let count = self.controller.selected_ids().len();
                self.success(&format!("{} selected", count))?;
            }
            Command::Deselect => {
                self.controller.deselect_all();
                self.success("Selection cleared")?;
            }
            Command::Copy => self.copy()?,
            Command::Paste => self.paste()?,
            Command::Ingredients => self.ingredients()?,
            Command::Ingredient(name) => self.add_ingredient(&name)?,
            Command::Use(id, indices) => self.use_ingredients(id, indices)?,
            Command::Help => self.help()?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn add(&mut self, draft: RecipeDraft) -> io::Result<()> {
        match self.controller.add_recipe(draft) {
            Ok(record) => self.success(&format!("Added {}", record)),
            Err(e) => self.error(&format!("Invalid record: {}. Please check the input values.", e)),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let recipes = self.controller.recipes();
        if recipes.is_empty() {
            return writeln!(self.output, "No recipes yet.");
        }

        let selected = self.controller.selected_ids();
        let header = format!(
            "  {:<4} {:<24} {:<14} {}",
            "ID", "Name", "Cooking Time", "Origin"
        );
        writeln!(self.output, "{}", header.bold())?;

        for recipe in &recipes {
            let marker = if selected.contains(&recipe.id) { "*" } else { " " };
            writeln!(
                self.output,
                "{} {:<4} {:<24} {:<14} {}",
                marker, recipe.id.0, recipe.name, recipe.cooking_time, recipe.origin
            )?;
        }

        writeln!(self.output, "\n{} Total: {} recipes", "✓".green(), recipes.len())
    }

    fn show(&mut self, id: RecipeId) -> io::Result<()> {
        let Some(recipe) = self.controller.recipe(id) else {
            return self.error(&StoreError::NotFound(id).to_string());
        };

        writeln!(self.output, "{}", format!("Details of {}", recipe.name).bold())?;
        writeln!(self.output, "  ID:           {}", recipe.id)?;
        writeln!(self.output, "  Cooking Time: {} min", recipe.cooking_time)?;
        writeln!(self.output, "  Origin:       {}", recipe.origin)?;

        let image = recipe
            .image_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "none".to_string());
        writeln!(self.output, "  Image:        {}", image)?;

        if !recipe.ingredients.is_empty() {
            writeln!(self.output, "  Ingredients:  {}", recipe.ingredients.join(", "))?;
        }

        writeln!(self.output, "  Description:")?;
        for line in recipe.description.lines() {
            writeln!(self.output, "    {}", line)?;
        }
        Ok(())
    }

    fn edit(&mut self, id: RecipeId, draft: RecipeDraft) -> io::Result<()> {
        let image_path = self.controller.recipe(id).and_then(|recipe| recipe.image_path);
        let fields = RecordFields {
            name: draft.name,
            cooking_time: draft.cooking_time,
            origin: draft.origin,
            description: draft.description,
            image_path,
        };

        match self.controller.save_changes(id, fields) {
            Ok(record) => self.success(&format!(
                "The recipe data has been updated successfully: {}",
                record
            )),
            Err(e) => self.error(&e.to_string()),
        }
    }

    fn image(&mut self, id: Option<RecipeId>, path: &str) -> io::Result<()> {
        let picker = TypedPathPicker::new(path);

        match id {
            None => match self.controller.pick_image(&picker) {
                Some(path) => self.success(&format!(
                    "Image picked for the next recipe: {}",
                    path.display()
                )),
                None => writeln!(self.output, "No image picked."),
            },
            Some(id) => match self.controller.change_image(id, &picker) {
                Ok(Some(record)) => self.success(&format!("Changed image of {}", record)),
                Ok(None) => writeln!(self.output, "Image unchanged."),
                Err(e) => self.error(&e.to_string()),
            },
        }
    }

    fn delete(&mut self, id: RecipeId) -> io::Result<()> {
        if self.controller.recipe(id).is_none() {
            return self.error(&StoreError::NotFound(id).to_string());
        }

        if !self.confirm("Are you sure you want to delete this record?")? {
            return writeln!(self.output, "Cancelled.");
        }

        if self.controller.delete_recipe(id) {
            self.success(&format!("Deleted recipe #{}", id))
        } else {
            self.error(&StoreError::NotFound(id).to_string())
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.confirm("Are you sure you want to delete all records?")? {
            return writeln!(self.output, "Cancelled.");
        }

        self.controller.delete_all();
        self.success("All recipes deleted")
    }

    fn select(&mut self, ids: &[RecipeId]) -> io::Result<()> {
        for &id in ids {
            if !self.controller.select(id) {
                self.error(&StoreError::NotFound(id).to_string())?;
            }
        }

        let count = self.controller.selected_ids().len();
        self.success(&format!("{} selected", count))
    }

    fn copy(&mut self) -> io::Result<()> {
        if self.controller.selected_ids().is_empty() {
            return writeln!(self.output, "Nothing selected.");
        }

        let copied = self.controller.copy_selected();
        self.success(&format!("Copied {} recipes", copied))
    }

    fn paste(&mut self) -> io::Result<()> {
        let pasted = self.controller.paste();
        if pasted.is_empty() {
            return writeln!(self.output, "Clipboard is empty.");
        }

        for record in &pasted {
            self.success(&format!("Pasted {}", record))?;
        }
        Ok(())
    }

    fn ingredients(&mut self) -> io::Result<()> {
        let grid = self.controller.ingredient_grid();
        let columns = grid.first().map(Vec::len).unwrap_or(1);

        for (row_index, row) in grid.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(column, name)| {
                    format!("{:>3}. {:<22}", row_index * columns + column, name)
                })
                .collect();
            writeln!(self.output, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }

    fn add_ingredient(&mut self, name: &str) -> io::Result<()> {
        match self.controller.add_ingredient(name) {
            Ok(()) => self.success(&format!(
                "The ingredient '{}' has been added successfully.",
                name
            )),
            Err(_) => self.error("Please enter the name of the ingredient."),
        }
    }

    fn use_ingredients(&mut self, id: RecipeId, indices: Vec<usize>) -> io::Result<()> {
        let selection: IngredientSelection = indices.into_iter().collect();

        match self.controller.apply_ingredients(id, &selection) {
            Ok(record) => self.success(&format!(
                "Updated {} with {} ingredients",
                record,
                record.ingredients.len()
            )),
            Err(e) => self.error(&e.to_string()),
        }
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "Commands:".bold())?;
        for (_, usage) in USAGE {
            writeln!(self.output, "  {}", usage)?;
        }
        Ok(())
    }

    /// Prints `message` and reads one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        if !self.confirm_destructive {
            return Ok(true);
        }

        let answer = self.prompt(&format!("{} [y/N] ", question))?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes") | Some("Yes")
        ))
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {}", "✓".green(), message)
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {}", "✗".red(), message)
    }
}
