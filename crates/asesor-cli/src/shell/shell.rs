use crate::{
    Client,
    banner::{Banner, FormAction},
    forms::{
        RegistrationForm, SessionEditForm, SessionForm, submit_create, submit_delete,
        submit_registration, submit_update,
    },
    gate, lister,
    models::Identity,
    session::Session,
    shell::{Command, Flow, MenuItem, Output, PromptError, PromptResult, Prompter},
};

use asesor_config::{ApiConfig, ListScopeMode, OwnerField};
use log::{debug, error};

const WELCOME: &str = "Welcome to the academic tutoring platform";
const LOGIN_REQUIRED: &str = "Please log in to see your tutoring sessions.";

/// Navigation shell: picks what to run for each line based on the session state
pub struct Shell {
    client: Client,
    session: Session,
    list_scope: ListScopeMode,
    owner_field: OwnerField,
    resolve_user_id: bool,
}

impl Shell {
    pub fn new(client: Client, api: &ApiConfig) -> Self {
        Self {
            client,
            session: Session::anonymous(),
            list_scope: api.list_scope,
            owner_field: api.owner_field,
            resolve_user_id: api.needs_user_id(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// First screen: greeting plus the anonymous menu
    pub fn welcome(&self, out: &mut Vec<Output>) {
        out.push(Output::Heading(WELCOME.to_string()));
        self.push_menu(out);
    }

    /// Run one line of input to completion
    pub async fn handle<P: Prompter>(
        &mut self,
        line: &str,
        prompter: &mut P,
        out: &mut Vec<Output>,
    ) -> Flow {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(message) => {
                out.push(Output::Banner(Banner::warning(message)));
                return Flow::Continue;
            }
        };
        debug!("Shell command: {command:?}");

        if let Some(item) = command.menu_item()
            && !MenuItem::for_session(&self.session).contains(&item)
        {
            out.push(Output::Banner(self.unavailable(item)));
            return Flow::Continue;
        }

        let result = match command {
            Command::Home => {
                self.home(out).await;
                Ok(())
            }
            Command::Login => self.login(prompter, out).await,
            Command::Register => self.register(prompter, out).await,
            Command::Add => self.add(prompter, out).await,
            Command::Edit(id) => self.edit(id, prompter, out).await,
            Command::Delete(id) => {
                self.delete(id, out).await;
                Ok(())
            }
            Command::Logout => {
                self.logout(out);
                Ok(())
            }
            Command::Help => {
                self.push_menu(out);
                Ok(())
            }
            Command::Quit => return Flow::Quit,
        };

        match result {
            Ok(()) => Flow::Continue,
            Err(PromptError::Cancelled) => {
                out.push(Output::Banner(Banner::info("Cancelled.")));
                Flow::Continue
            }
            Err(PromptError::Closed) => Flow::Quit,
            Err(e) => {
                error!("Reading input failed: {e}");
                out.push(Output::Banner(Banner::error("Could not read input.")));
                Flow::Quit
            }
        }
    }

    fn unavailable(&self, item: MenuItem) -> Banner {
        match self.session.identity() {
            Some(identity) if matches!(item, MenuItem::Login | MenuItem::Register) => {
                Banner::warning(format!(
                    "You are already signed in as {}. Log out first.",
                    identity.username
                ))
            }
            _ => Banner::warning(LOGIN_REQUIRED),
        }
    }

    fn push_menu(&self, out: &mut Vec<Output>) {
        out.push(Output::Menu {
            items: MenuItem::for_session(&self.session).to_vec(),
            authenticated: self.session.is_authenticated(),
        });
    }

    async fn home(&self, out: &mut Vec<Output>) {
        match self.session.identity() {
            Some(identity) => self.render_list(identity, out).await,
            None => out.push(Output::Heading(WELCOME.to_string())),
        }
    }

    async fn render_list(&self, identity: &Identity, out: &mut Vec<Output>) {
        let listing = lister::list(&self.client, identity, self.list_scope).await;

        out.push(Output::Heading(format!(
            "Tutoring sessions for {}",
            identity.username
        )));
        if let Some(error) = listing.error {
            out.push(Output::Banner(Banner::error(error)));
        }
        out.push(Output::Sessions(listing.sessions));
    }

    async fn login<P: Prompter>(&mut self, prompter: &mut P, out: &mut Vec<Output>) -> PromptResult<()> {
        let username = prompter.ask("Username")?;
        let password = prompter.ask_secret("Password")?;

        match gate::authenticate(&self.client, &username, &password, self.resolve_user_id).await {
            Ok(identity) => {
                self.session.sign_in(identity);
                out.push(Output::Banner(Banner::success("Login successful!")));
                // State changed: redraw the menu and the user's list
                self.push_menu(out);
                self.home(out).await;
            }
            Err(e) => out.push(Output::Banner(Banner::warning(e.user_message()))),
        }

        Ok(())
    }

    async fn register<P: Prompter>(&self, prompter: &mut P, out: &mut Vec<Output>) -> PromptResult<()> {
        let form = RegistrationForm {
            nombre: prompter.ask("First name")?,
            apellido: prompter.ask("Last name")?,
            email: prompter.ask("Email")?,
            username: prompter.ask("Username")?,
            password: prompter.ask_secret("Password")?,
            confirm_password: prompter.ask_secret("Confirm password")?,
        };

        let result = submit_registration(&self.client, &form).await;
        out.push(Output::Banner(FormAction::Register.banner(&result)));

        Ok(())
    }

    async fn add<P: Prompter>(&self, prompter: &mut P, out: &mut Vec<Output>) -> PromptResult<()> {
        let Some(identity) = self.session.identity() else {
            out.push(Output::Banner(Banner::warning(LOGIN_REQUIRED)));
            return Ok(());
        };

        let form = SessionForm {
            titulo: prompter.ask("Title")?,
            descripcion: prompter.ask("Description")?,
            fecha: prompter.ask("Date (YYYY-MM-DD)")?,
            hora: prompter.ask("Time (HH:MM)")?,
            profesor: prompter.ask("Instructor")?,
        };

        let result = submit_create(&self.client, identity, &form, self.owner_field).await;
        out.push(Output::Banner(FormAction::Create.banner(&result)));

        if result.is_ok() {
            self.render_list(identity, out).await;
        }

        Ok(())
    }

    async fn edit<P: Prompter>(&self, id: i64, prompter: &mut P, out: &mut Vec<Output>) -> PromptResult<()> {
        let Some(identity) = self.session.identity() else {
            out.push(Output::Banner(Banner::warning(LOGIN_REQUIRED)));
            return Ok(());
        };

        out.push(Output::Heading(format!(
            "Editing tutoring session #{id} (leave a field blank to keep it)"
        )));
        let form = SessionEditForm {
            titulo: prompter.ask("Title")?,
            descripcion: prompter.ask("Description")?,
            fecha: prompter.ask("Date (YYYY-MM-DD)")?,
            hora: prompter.ask("Time (HH:MM)")?,
            profesor: prompter.ask("Instructor")?,
        };

        let result = submit_update(&self.client, identity, id, &form).await;
        out.push(Output::Banner(FormAction::Update.banner(&result)));

        if result.is_ok() {
            self.render_list(identity, out).await;
        }

        Ok(())
    }

    async fn delete(&self, id: i64, out: &mut Vec<Output>) {
        let Some(identity) = self.session.identity() else {
            out.push(Output::Banner(Banner::warning(LOGIN_REQUIRED)));
            return;
        };

        let result = submit_delete(&self.client, identity, id).await;
        out.push(Output::Banner(FormAction::Delete.banner(&result)));

        if result.is_ok() {
            self.render_list(identity, out).await;
        }
    }

    fn logout(&mut self, out: &mut Vec<Output>) {
        self.session.sign_out();
        out.push(Output::Banner(Banner::info("Logged out.")));
        self.push_menu(out);
    }
}
