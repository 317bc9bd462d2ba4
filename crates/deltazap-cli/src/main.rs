// deltazap-core/deltazap-cli
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password, Select};
use secrecy::SecretString;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::info;

use deltazap_core::dtos::{
    Appointment, AppointmentDraft, ChatId, ContentKind, Demand, DemandDraft, DemandStatus,
    HumanStatus, InternalLinkDraft, Message, Note, NoteDraft, SendOutcome, SupportMaterialDraft,
};
use deltazap_core::{open_store, Client};
use deltazap_xmpp::connector::xmpp_rs::Connector;

use crate::config::CliConfig;
use crate::logging::enable_logging;
use crate::terminal::{Delegate, TerminalFocus, TerminalNotificationService};
use crate::type_display::{
    AppointmentEnvelope, ChatEnvelope, DemandEnvelope, InternalLinkEnvelope, MessageEnvelope,
    NoteEnvelope, RequestEnvelope, RosterItemEnvelope, StatusEnvelope, SupportMaterialEnvelope,
};
use crate::type_selection::{
    prompt_chat_id, prompt_date, prompt_opt_date, prompt_opt_string, prompt_string,
    prompt_string_with_default, prompt_user_id, select_item_from_list, select_multiple_from_list,
    select_variant,
};

mod config;
mod logging;
mod terminal;
mod type_display;
mod type_selection;

#[derive(Debug, PartialEq, EnumIter, Display, Clone)]
enum Selection {
    #[strum(serialize = "List chats")]
    ListChats,
    #[strum(serialize = "Open chat")]
    OpenChat,
    #[strum(serialize = "Send message")]
    SendMessage,
    #[strum(serialize = "Reply to message")]
    ReplyToMessage,
    #[strum(serialize = "Forward message")]
    ForwardMessage,
    #[strum(serialize = "React to message")]
    ReactToMessage,
    #[strum(serialize = "Create group")]
    CreateGroup,
    #[strum(serialize = "List contacts")]
    ListContacts,
    #[strum(serialize = "Add contact")]
    AddContact,
    #[strum(serialize = "Remove contact")]
    RemoveContact,
    #[strum(serialize = "Contact requests")]
    ContactRequests,
    #[strum(serialize = "Set availability")]
    SetAvailability,
    #[strum(serialize = "Notes")]
    Notes,
    #[strum(serialize = "Appointments")]
    Appointments,
    #[strum(serialize = "Demands")]
    Demands,
    #[strum(serialize = "Statuses")]
    Statuses,
    #[strum(serialize = "Library")]
    Library,
    #[strum(serialize = "Log out")]
    LogOut,
    #[strum(serialize = "Quit")]
    Quit,
}

#[derive(Debug, PartialEq, EnumIter, Display, Clone)]
enum ContentAction {
    #[strum(serialize = "List")]
    List,
    #[strum(serialize = "Create")]
    Create,
    #[strum(serialize = "Edit")]
    Edit,
    #[strum(serialize = "Delete")]
    Delete,
    #[strum(serialize = "Back")]
    Back,
}

#[derive(Debug, PartialEq, EnumIter, Display, Clone)]
enum LibraryAction {
    #[strum(serialize = "List")]
    List,
    #[strum(serialize = "Add support material")]
    AddSupportMaterial,
    #[strum(serialize = "Add internal link")]
    AddInternalLink,
    #[strum(serialize = "Delete support material")]
    DeleteSupportMaterial,
    #[strum(serialize = "Delete internal link")]
    DeleteInternalLink,
    #[strum(serialize = "Back")]
    Back,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::from_env()?;
    enable_logging(&config)?;

    let store = open_store(&config.database_path).await?;
    let focus = TerminalFocus::default();

    let client = Client::builder()
        .set_store(store)
        .set_connector_provider(Connector::provider())
        .set_config(config.app_config.clone())
        .set_delegate(Some(Box::new(Delegate {})))
        .set_notification_service(TerminalNotificationService::default())
        .set_window_focus_provider(focus.clone())
        .build();

    info!("DeltaZap started.");

    loop {
        if !login(&client).await? {
            return Ok(());
        }

        if !run_menu(&client, &focus).await? {
            client.disconnect().await;
            return Ok(());
        }
    }
}

/// Restores the last session or asks for credentials until a connection succeeds. Returns
/// `false` if the user gave up.
async fn login(client: &Client) -> Result<bool> {
    match client.restore_session().await {
        Ok(true) => return Ok(true),
        Ok(false) => (),
        Err(err) => println!("⚠️  Could not restore your last session: {}", err),
    }

    loop {
        let address = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Address (empty to quit)")
            .allow_empty(true)
            .interact_text()?;
        if address.trim().is_empty() {
            return Ok(false);
        }

        let password = Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?;

        match client
            .connect(address.trim(), SecretString::new(password))
            .await
        {
            Ok(()) => return Ok(true),
            Err(err) => println!("⚠️  {}", err),
        }
    }
}

/// Runs the main menu. Returns `false` when the user wants to quit and `true` after a log out.
async fn run_menu(client: &Client, focus: &TerminalFocus) -> Result<bool> {
    let options = Selection::iter().collect::<Vec<_>>();

    loop {
        let Some(idx) = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{} | What do you want to do?",
                client
                    .account()
                    .map(|id| id.to_string())
                    .unwrap_or_default()
            ))
            .default(0)
            .items(&options)
            .interact_opt()?
        else {
            continue;
        };

        let result = match options[idx] {
            Selection::ListChats => list_chats(client),
            Selection::OpenChat => open_chat(client, focus).await,
            Selection::SendMessage => send_message(client).await,
            Selection::ReplyToMessage => reply_to_message(client).await,
            Selection::ForwardMessage => forward_message(client).await,
            Selection::ReactToMessage => react_to_message(client).await,
            Selection::CreateGroup => create_group(client).await,
            Selection::ListContacts => list_contacts(client),
            Selection::AddContact => add_contact(client).await,
            Selection::RemoveContact => remove_contact(client).await,
            Selection::ContactRequests => handle_contact_requests(client).await,
            Selection::SetAvailability => set_availability(client).await,
            Selection::Notes => manage_notes(client).await,
            Selection::Appointments => manage_appointments(client).await,
            Selection::Demands => manage_demands(client).await,
            Selection::Statuses => manage_statuses(client).await,
            Selection::Library => manage_library(client).await,
            Selection::LogOut => {
                client.disconnect().await;
                return Ok(true);
            }
            Selection::Quit => return Ok(false),
        };

        if let Err(err) = result {
            println!("⚠️  {}", err);
        }
    }
}

fn print_outcome(outcome: SendOutcome) {
    match outcome {
        SendOutcome::Delivered { id } => println!("✅ Sent ({}).", id),
        SendOutcome::PersistenceFailed { id, message } => {
            println!("⚠️  Sent ({}) but could not be saved: {}", id, message)
        }
        SendOutcome::TransportFailed { message } => println!("⚠️  Not sent: {}", message),
    }
}

fn select_chat(client: &Client) -> Result<Option<ChatId>> {
    Ok(select_item_from_list("Chat", client.messaging.chats(), |chat| {
        ChatEnvelope(chat).to_string()
    })?
    .map(|chat| chat.id))
}

fn select_message(client: &Client, chat_id: &ChatId) -> Result<Option<Message>> {
    let messages = client
        .messaging
        .chat(chat_id)
        .map(|chat| chat.messages)
        .unwrap_or_default();
    select_item_from_list("Message", messages.into_iter().rev(), |message| {
        MessageEnvelope(message).to_string()
    })
}

fn list_chats(client: &Client) -> Result<()> {
    for chat in client.messaging.chats() {
        println!("{}", ChatEnvelope(&chat));
    }
    Ok(())
}

async fn open_chat(client: &Client, focus: &TerminalFocus) -> Result<()> {
    let Some(chat_id) = select_chat(client)? else {
        return Ok(());
    };

    client.messaging.mark_chat_as_read(&chat_id).await;
    focus.set_focused(true);

    if let Some(chat) = client.messaging.chat(&chat_id) {
        println!("{}", ChatEnvelope(&chat));
        for message in &chat.messages {
            println!("{}", MessageEnvelope(message));
        }
    }

    // New messages of the open chat are printed by the delegate until the user leaves.
    let _ = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Press enter to leave the chat")
        .allow_empty(true)
        .interact_text();

    client.messaging.clear_active_chat();
    focus.set_focused(false);
    Ok(())
}

async fn send_message(client: &Client) -> Result<()> {
    let chat_id = match select_chat(client)? {
        Some(chat_id) => chat_id,
        None => prompt_chat_id("Recipient")?,
    };

    let kind = select_variant(
        "Kind",
        &[ContentKind::Text, ContentKind::Image, ContentKind::Document],
    )?;
    let (body, filename) = match kind {
        ContentKind::Text => (prompt_string("Message")?, None),
        ContentKind::Image => (prompt_string("Image URL")?, None),
        ContentKind::Document => (
            prompt_string("Document URL")?,
            Some(prompt_string("File name")?),
        ),
    };

    print_outcome(
        client
            .messaging
            .send_message(&chat_id, body, kind, filename)
            .await?,
    );
    Ok(())
}

async fn reply_to_message(client: &Client) -> Result<()> {
    let Some(chat_id) = select_chat(client)? else {
        return Ok(());
    };
    let Some(message) = select_message(client, &chat_id)? else {
        return Ok(());
    };
    let body = prompt_string("Reply")?;
    print_outcome(
        client
            .messaging
            .reply_to_message(&chat_id, &message.id, body)
            .await?,
    );
    Ok(())
}

async fn forward_message(client: &Client) -> Result<()> {
    let Some(from) = select_chat(client)? else {
        return Ok(());
    };
    let Some(message) = select_message(client, &from)? else {
        return Ok(());
    };
    let Some(to) = select_chat(client)? else {
        return Ok(());
    };
    print_outcome(
        client
            .messaging
            .forward_message(&from, &message.id, &to)
            .await?,
    );
    Ok(())
}

async fn react_to_message(client: &Client) -> Result<()> {
    let Some(chat_id) = select_chat(client)? else {
        return Ok(());
    };
    let Some(message) = select_message(client, &chat_id)? else {
        return Ok(());
    };
    let emoji = select_variant("Reaction", &["👍", "❤️", "😂", "😮", "😢", "🙏"])?;
    client
        .messaging
        .react_to_message(&chat_id, &message.id, emoji)
        .await
}

async fn create_group(client: &Client) -> Result<()> {
    let room = prompt_chat_id("Room address")?;
    let name = prompt_string("Name")?;
    let participants = select_multiple_from_list(
        "Participants",
        client.contacts.roster().into_iter().map(|item| item.user_id),
        |user_id| user_id.to_string(),
    )?;
    let chat = client
        .conversations
        .create_group(&room, name, participants)
        .await?;
    println!("✅ Created {}", ChatEnvelope(&chat));
    Ok(())
}

fn list_contacts(client: &Client) -> Result<()> {
    for item in client.contacts.roster() {
        println!("{}", RosterItemEnvelope(&item));
    }
    Ok(())
}

async fn add_contact(client: &Client) -> Result<()> {
    let user_id = prompt_user_id("Address")?;
    let name = prompt_opt_string("Name")?;
    client.contacts.add_contact(&user_id, name).await
}

async fn remove_contact(client: &Client) -> Result<()> {
    let Some(item) = select_item_from_list("Contact", client.contacts.roster(), |item| {
        RosterItemEnvelope(item).to_string()
    })?
    else {
        return Ok(());
    };
    client.contacts.remove_contact(&item.user_id).await
}

async fn handle_contact_requests(client: &Client) -> Result<()> {
    let Some(request) = select_item_from_list(
        "Request",
        client.contacts.pending_requests(),
        |request| RequestEnvelope(request).to_string(),
    )?
    else {
        return Ok(());
    };

    match select_variant("Answer", &["Accept", "Decline"])? {
        "Accept" => client.contacts.accept_subscription(&request.user_id).await,
        _ => client.contacts.decline_subscription(&request.user_id).await,
    }
}

async fn set_availability(client: &Client) -> Result<()> {
    let status = select_variant("Availability", &HumanStatus::iter().collect::<Vec<_>>())?;
    let text = prompt_opt_string("Status text")?;
    client.presence.send_presence(status, text).await
}

async fn select_note(client: &Client) -> Result<Option<Note>> {
    let notes = client.notes.load_notes().await?;
    select_item_from_list("Note", notes, |note| NoteEnvelope(note).to_string())
}

async fn manage_notes(client: &Client) -> Result<()> {
    let action = select_variant("Notes", &ContentAction::iter().collect::<Vec<_>>())?;
    match action {
        ContentAction::List => {
            for note in client.notes.load_notes().await? {
                println!("{}", NoteEnvelope(&note));
            }
        }
        ContentAction::Create => {
            let note = client
                .notes
                .create_note(NoteDraft {
                    title: prompt_string("Title")?,
                    content: prompt_string("Content")?,
                })
                .await?;
            println!("✅ {}", NoteEnvelope(&note));
        }
        ContentAction::Edit => {
            let Some(note) = select_note(client).await? else {
                return Ok(());
            };
            let draft = NoteDraft {
                title: prompt_string_with_default("Title", note.title)?,
                content: prompt_string_with_default("Content", note.content)?,
            };
            client.notes.update_note(note.id, draft).await?;
        }
        ContentAction::Delete => {
            let Some(note) = select_note(client).await? else {
                return Ok(());
            };
            client.notes.delete_note(note.id).await?;
        }
        ContentAction::Back => (),
    }
    Ok(())
}

fn prompt_appointment() -> Result<AppointmentDraft> {
    Ok(AppointmentDraft {
        title: prompt_string("Title")?,
        description: prompt_opt_string("Description")?,
        starts_at: prompt_date("Starts at")?,
        ends_at: prompt_opt_date("Ends at")?,
        location: prompt_opt_string("Location")?,
    })
}

async fn select_appointment(client: &Client) -> Result<Option<Appointment>> {
    let appointments = client.appointments.load_appointments().await?;
    select_item_from_list("Appointment", appointments, |appointment| {
        AppointmentEnvelope(appointment).to_string()
    })
}

async fn manage_appointments(client: &Client) -> Result<()> {
    let action = select_variant("Appointments", &ContentAction::iter().collect::<Vec<_>>())?;
    match action {
        ContentAction::List => {
            for appointment in client.appointments.load_appointments().await? {
                println!("{}", AppointmentEnvelope(&appointment));
            }
        }
        ContentAction::Create => {
            let appointment = client
                .appointments
                .create_appointment(prompt_appointment()?)
                .await?;
            println!("✅ {}", AppointmentEnvelope(&appointment));
        }
        ContentAction::Edit => {
            let Some(appointment) = select_appointment(client).await? else {
                return Ok(());
            };
            client
                .appointments
                .update_appointment(appointment.id, prompt_appointment()?)
                .await?;
        }
        ContentAction::Delete => {
            let Some(appointment) = select_appointment(client).await? else {
                return Ok(());
            };
            client
                .appointments
                .delete_appointment(appointment.id)
                .await?;
        }
        ContentAction::Back => (),
    }
    Ok(())
}

async fn select_demand(client: &Client) -> Result<Option<Demand>> {
    let demands = client.demands.load_demands().await?;
    select_item_from_list("Demand", demands, |demand| DemandEnvelope(demand).to_string())
}

async fn manage_demands(client: &Client) -> Result<()> {
    let action = select_variant("Demands", &ContentAction::iter().collect::<Vec<_>>())?;
    match action {
        ContentAction::List => {
            for demand in client.demands.load_demands().await? {
                println!("{}", DemandEnvelope(&demand));
            }
        }
        ContentAction::Create => {
            let demand = client
                .demands
                .create_demand(DemandDraft {
                    title: prompt_string("Title")?,
                    description: prompt_string("Description")?,
                })
                .await?;
            println!("✅ {}", DemandEnvelope(&demand));
        }
        ContentAction::Edit => {
            let Some(demand) = select_demand(client).await? else {
                return Ok(());
            };
            let status = select_variant("Status", &DemandStatus::iter().collect::<Vec<_>>())?;
            if status != demand.status {
                client.demands.set_demand_status(demand.id, status).await?;
            }
            let draft = DemandDraft {
                title: prompt_string_with_default("Title", demand.title)?,
                description: prompt_string_with_default("Description", demand.description)?,
            };
            client.demands.update_demand(demand.id, draft).await?;
        }
        ContentAction::Delete => {
            let Some(demand) = select_demand(client).await? else {
                return Ok(());
            };
            client.demands.delete_demand(demand.id).await?;
        }
        ContentAction::Back => (),
    }
    Ok(())
}

async fn manage_statuses(client: &Client) -> Result<()> {
    let action = select_variant("Statuses", &ContentAction::iter().collect::<Vec<_>>())?;

    match action {
        ContentAction::List => {
            for status in client.statuses.load_roster_statuses().await? {
                println!("{}", StatusEnvelope(&status));
            }
        }
        ContentAction::Create => {
            let status = client
                .statuses
                .post_status(prompt_string("What's new?")?)
                .await?;
            println!("✅ {}", StatusEnvelope(&status));
        }
        ContentAction::Edit => println!("Statuses can't be edited."),
        ContentAction::Delete => {
            let account = client.account();
            let own_statuses = client
                .statuses
                .load_roster_statuses()
                .await?
                .into_iter()
                .filter(|status| Some(&status.owner) == account.as_ref());
            let Some(status) = select_item_from_list("Status", own_statuses, |status| {
                StatusEnvelope(status).to_string()
            })?
            else {
                return Ok(());
            };
            client.statuses.delete_status(status.id).await?;
        }
        ContentAction::Back => (),
    }
    Ok(())
}

async fn manage_library(client: &Client) -> Result<()> {
    let action = select_variant("Library", &LibraryAction::iter().collect::<Vec<_>>())?;

    match action {
        LibraryAction::List => {
            for material in client.library.load_support_materials().await? {
                println!("{}", SupportMaterialEnvelope(&material));
            }
            for link in client.library.load_internal_links().await? {
                println!("{}", InternalLinkEnvelope(&link));
            }
        }
        LibraryAction::AddSupportMaterial => {
            let material = client
                .library
                .add_support_material(SupportMaterialDraft {
                    title: prompt_string("Title")?,
                    description: prompt_opt_string("Description")?,
                    url: prompt_string("URL")?,
                })
                .await?;
            println!("✅ {}", SupportMaterialEnvelope(&material));
        }
        LibraryAction::AddInternalLink => {
            let link = client
                .library
                .add_internal_link(InternalLinkDraft {
                    title: prompt_string("Title")?,
                    url: prompt_string("URL")?,
                    description: prompt_opt_string("Description")?,
                })
                .await?;
            println!("✅ {}", InternalLinkEnvelope(&link));
        }
        LibraryAction::DeleteSupportMaterial => {
            let materials = client.library.load_support_materials().await?;
            let Some(material) = select_item_from_list("Material", materials, |material| {
                SupportMaterialEnvelope(material).to_string()
            })?
            else {
                return Ok(());
            };
            client.library.delete_support_material(material.id).await?;
        }
        LibraryAction::DeleteInternalLink => {
            let links = client.library.load_internal_links().await?;
            let Some(link) =
                select_item_from_list("Link", links, |link| InternalLinkEnvelope(link).to_string())?
            else {
                return Ok(());
            };
            client.library.delete_internal_link(link.id).await?;
        }
        LibraryAction::Back => (),
    }
    Ok(())
}
