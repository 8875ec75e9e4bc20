//! Line-oriented navigation over a [`RecipeHub`].

use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::builder::RecipeHub;
use crate::pages::Page;
use crate::HubError;

pub const HELP: &str = "\
Commands:
  go <path>         open /Home, /recipes, /category/<name>
  page <n>          show page n of the current listing
  category [name]   filter /recipes by category (no name: all categories)
  search <term>     search /recipes by ingredient
  reload            fetch the current page again
  help              show this message
  quit              exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Page(u32),
    Category(String),
    Search(String),
    Reload,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "go" if !rest.is_empty() => Ok(Command::Go(rest.to_string())),
            "page" => rest
                .parse()
                .map(Command::Page)
                .map_err(|_| format!("Invalid page number: {rest:?}")),
            "category" => Ok(Command::Category(rest.to_string())),
            "search" => Ok(Command::Search(rest.to_string())),
            "reload" => Ok(Command::Reload),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(format!("Unknown command: {line:?} (try 'help')")),
        }
    }
}

/// The currently mounted page and the hub it reads from
pub struct Session<'a> {
    hub: &'a RecipeHub,
    page: Page,
}

impl<'a> Session<'a> {
    pub async fn start(hub: &'a RecipeHub, path: &str) -> Session<'a> {
        let page = hub.navigate(path).await;
        Session { hub, page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn render(&self) -> String {
        self.hub.render(&self.page)
    }

    /// Apply one command. Returns the text to show, or `None` on quit.
    ///
    /// Commands the current page has no use for are refused with
    /// [`HubError::Unsupported`].
    pub async fn execute(&mut self, command: Command) -> Result<Option<String>, HubError> {
        debug!("Executing {:?}", command);
        let hub = self.hub;
        let source = hub.source();
        match command {
            Command::Go(path) => {
                self.page = hub.navigate(&path).await;
            }
            Command::Page(number) => {
                if !self.page.go_to_page(number) {
                    return Err(unsupported("This page has no pagination"));
                }
            }
            Command::Category(name) => match &mut self.page {
                Page::Recipes(recipes) => recipes.select_category(source, &name).await,
                _ => return Err(unsupported("Category filter is only available on /recipes")),
            },
            Command::Search(term) => match &mut self.page {
                Page::Recipes(recipes) => recipes.search(source, &term).await,
                _ => return Err(unsupported("Search is only available on /recipes")),
            },
            Command::Reload => self.page.reload(source).await,
            Command::Help => return Ok(Some(HELP.to_string())),
            Command::Quit => return Ok(None),
        }
        Ok(Some(self.render()))
    }
}

fn unsupported(message: &str) -> HubError {
    HubError::Unsupported(message.to_string())
}

/// Read commands from `input` until EOF or `quit`, writing views to `output`.
pub async fn run<R, W>(session: &mut Session<'_>, input: R, mut output: W) -> Result<(), HubError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(session.render().as_bytes()).await?;
    let mut lines = input.lines();

    loop {
        output.write_all(b"> ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let text = match Command::parse(&line) {
            Ok(command) => match session.execute(command).await {
                Ok(Some(text)) => text,
                Ok(None) => break,
                Err(e) => {
                    warn!("{}", e);
                    format!("{e}\n")
                }
            },
            Err(message) => {
                warn!("{}", message);
                format!("{message}\n")
            }
        };
        output.write_all(text.as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("go /recipes"), Ok(Command::Go("/recipes".into())));
        assert_eq!(Command::parse("page 3"), Ok(Command::Page(3)));
        assert_eq!(Command::parse("category"), Ok(Command::Category(String::new())));
        assert_eq!(
            Command::parse("category  Side Dish "),
            Ok(Command::Category("Side Dish".into()))
        );
        assert_eq!(
            Command::parse("search chicken breast"),
            Ok(Command::Search("chicken breast".into()))
        );
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse("page two").is_err());
        assert!(Command::parse("page -1").is_err());
        assert!(Command::parse("go").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
