//! Buttons and text inputs a page offers, and the actions they trigger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use troubadour_saves::SaveRow;
use troubadour_story::{Presenter, RenderSink, StoryResult, region};
use troubadour_text::id::ID_PREFIX;
use troubadour_text::{RichText, html};

/// An interactive element shown below the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Input {
    /// A button that runs a page.
    Button {
        /// Label.
        text: RichText,
        /// Page to run.
        method: String,
        /// Hover text for the label.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tooltip: Option<RichText>,
    },
    /// A text field with a submit button that runs a page with the entered value.
    TextInput {
        /// Submit button label.
        button_text: RichText,
        /// Page to run.
        method: String,
        /// Value used when the field is left empty.
        #[serde(default)]
        default_value: String,
        /// Placeholder shown in the empty field.
        #[serde(default)]
        placeholder_text: String,
        /// Hover text for the submit button.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tooltip: Option<RichText>,
    },
}

impl Input {
    /// A button running `method`.
    pub fn button(text: impl Into<RichText>, method: impl Into<String>) -> Self {
        Input::Button {
            text: text.into(),
            method: method.into(),
            tooltip: None,
        }
    }

    /// A text input running `method` with the entered value.
    pub fn text_input(button_text: impl Into<RichText>, method: impl Into<String>) -> Self {
        Input::TextInput {
            button_text: button_text.into(),
            method: method.into(),
            default_value: String::new(),
            placeholder_text: String::new(),
            tooltip: None,
        }
    }

    /// Attach hover text.
    pub fn with_tooltip(mut self, text: impl Into<RichText>) -> Self {
        match &mut self {
            Input::Button { tooltip, .. } | Input::TextInput { tooltip, .. } => {
                *tooltip = Some(text.into());
            }
        }
        self
    }

    /// Set the value used for an empty submission. No effect on buttons.
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        if let Input::TextInput { default_value, .. } = &mut self {
            *default_value = value.into();
        }
        self
    }

    /// Set the placeholder. No effect on buttons.
    pub fn with_placeholder(mut self, value: impl Into<String>) -> Self {
        if let Input::TextInput {
            placeholder_text, ..
        } = &mut self
        {
            *placeholder_text = value.into();
        }
        self
    }
}

/// What clicking a registered element does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a page with no value.
    Call {
        /// Page to run.
        method: String,
    },
    /// Run a page with the value of a text field.
    Submit {
        /// Page to run.
        method: String,
        /// Id of the text field to read.
        input_id: String,
        /// Value used when the field is empty.
        default_value: String,
    },
    /// Load a named save.
    LoadSave(u32),
    /// Delete a named save.
    DeleteSave(u32),
}

impl Action {
    fn is_save_action(&self) -> bool {
        matches!(self, Action::LoadSave(_) | Action::DeleteSave(_))
    }
}

/// Element id to action.
#[derive(Debug, Clone, Default)]
pub struct Actions {
    by_element: BTreeMap<String, Action>,
}

impl Actions {
    /// Action registered for an element.
    pub fn get(&self, element_id: &str) -> Option<&Action> {
        self.by_element.get(element_id)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.by_element.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_element.is_empty()
    }

    /// Registered element ids.
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.by_element.keys().map(String::as_str)
    }

    fn insert(&mut self, element_id: String, action: Action) {
        self.by_element.insert(element_id, action);
    }

    fn drop_page_actions(&mut self) {
        self.by_element.retain(|_, a| a.is_save_action());
    }

    fn drop_save_actions(&mut self) {
        self.by_element.retain(|_, a| !a.is_save_action());
    }
}

/// Clear the interface region and render `inputs` into it, replacing the
/// previously registered page actions.
pub(crate) fn render_interface<S: RenderSink>(
    inputs: &[Input],
    out: &mut Presenter<S>,
    actions: &mut Actions,
) -> StoryResult<()> {
    out.clear(region::STORY_INTERFACE);
    actions.drop_page_actions();

    for input in inputs {
        match input {
            Input::Button {
                text,
                method,
                tooltip,
            } => {
                let id = out.ids().element_id("button");
                let label = labelled(text, tooltip.as_ref());
                let rendered = out.render(&label, false)?;
                out.append(
                    region::STORY_INTERFACE,
                    &format!(
                        "<button class=\"button\" type=\"button\" id=\"{id}\">{}</button>",
                        rendered.html
                    ),
                );
                for (anchor, body) in &rendered.tooltips {
                    out.bind_tooltip(anchor, body);
                }
                actions.insert(
                    id,
                    Action::Call {
                        method: method.clone(),
                    },
                );
            }
            Input::TextInput {
                button_text,
                method,
                default_value,
                placeholder_text,
                tooltip,
            } => {
                let n = out.ids().next_id();
                let input_id = format!("{ID_PREFIX}_inputtext_input_{n}");
                let button_id = format!("{ID_PREFIX}_inputtext_button_{n}");
                let label = labelled(button_text, tooltip.as_ref());
                let rendered = out.render(&label, false)?;
                out.append(
                    region::STORY_INTERFACE,
                    &format!(
                        "<div class=\"field has-addons\">\
                         <div class=\"control is-flex-grow-1\">\
                         <input id=\"{input_id}\" class=\"input\" type=\"text\" placeholder=\"{}\">\
                         </div><div class=\"control\">\
                         <a id=\"{button_id}\" class=\"button\">{}</a>\
                         </div></div>",
                        html::escape_attr(placeholder_text),
                        rendered.html
                    ),
                );
                for (anchor, body) in &rendered.tooltips {
                    out.bind_tooltip(anchor, body);
                }
                actions.insert(
                    button_id,
                    Action::Submit {
                        method: method.clone(),
                        input_id,
                        default_value: default_value.clone(),
                    },
                );
            }
        }
    }
    Ok(())
}

fn labelled(text: &RichText, tooltip: Option<&RichText>) -> RichText {
    match tooltip {
        Some(tip) => text.with_tooltip(tip),
        None => text.clone(),
    }
}

/// Replace the saves table and its load and delete actions.
pub(crate) fn render_saves_table<S: RenderSink>(
    rows: &[SaveRow],
    out: &mut Presenter<S>,
    actions: &mut Actions,
) {
    actions.drop_save_actions();

    let mut table = String::new();
    for row in rows {
        let load_id = format!("{ID_PREFIX}-load-{}", row.id);
        let delete_id = format!("{ID_PREFIX}-rmsave-{}", row.id);
        table.push_str(&format!(
            "<tr><th>{}</th><th>{}</th><th>{}</th><th>\
             <a id=\"{load_id}\" href=\"javascript:void(0);\">Load</a> - \
             <a id=\"{delete_id}\" href=\"javascript:void(0);\">Delete</a>\
             </th></tr>",
            row.id,
            html::escape_attr(&row.name),
            row.date
        ));
        actions.insert(load_id, Action::LoadSave(row.id));
        actions.insert(delete_id, Action::DeleteSave(row.id));
    }
    out.set_html(region::SAVES_TABLE, &table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use troubadour_story::MemorySink;

    #[test]
    fn button_markup_and_action() {
        let mut out = Presenter::new(MemorySink::new());
        let mut actions = Actions::default();
        render_interface(&[Input::button("Go north", "north")], &mut out, &mut actions).unwrap();

        insta::assert_snapshot!(
            out.sink().region(region::STORY_INTERFACE),
            @r#"<button class="button" type="button" id="troubadour_button_0">Go north</button>"#
        );
        assert_eq!(
            actions.get("troubadour_button_0"),
            Some(&Action::Call {
                method: "north".into()
            })
        );
    }

    #[test]
    fn text_input_shares_one_id() {
        let mut out = Presenter::new(MemorySink::new());
        let mut actions = Actions::default();
        let input = Input::text_input("Name", "named")
            .with_default_value("Ada")
            .with_placeholder("your name");
        render_interface(&[input], &mut out, &mut actions).unwrap();

        let html = out.sink().region(region::STORY_INTERFACE);
        assert!(html.contains("id=\"troubadour_inputtext_input_0\""));
        assert!(html.contains("id=\"troubadour_inputtext_button_0\""));
        assert!(html.contains("placeholder=\"your name\""));
        assert_eq!(
            actions.get("troubadour_inputtext_button_0"),
            Some(&Action::Submit {
                method: "named".into(),
                input_id: "troubadour_inputtext_input_0".into(),
                default_value: "Ada".into(),
            })
        );
    }

    #[test]
    fn button_tooltip_is_bound() {
        let mut out = Presenter::new(MemorySink::new());
        let mut actions = Actions::default();
        let input = Input::button("Rest", "rest").with_tooltip("Heals you");
        render_interface(&[input], &mut out, &mut actions).unwrap();
        assert_eq!(
            out.sink().tooltip("troubadour_tooltip_1"),
            Some("<p>Heals you</p>\n")
        );
    }

    #[test]
    fn rerender_drops_old_page_actions_only() {
        let mut out = Presenter::new(MemorySink::new());
        let mut actions = Actions::default();
        let rows = [SaveRow {
            id: 3,
            name: "camp".into(),
            date: "2024-01-01 10:00".into(),
        }];
        render_saves_table(&rows, &mut out, &mut actions);
        render_interface(&[Input::button("A", "a")], &mut out, &mut actions).unwrap();
        render_interface(&[Input::button("B", "b")], &mut out, &mut actions).unwrap();

        assert!(actions.get("troubadour_button_0").is_none());
        assert!(actions.get("troubadour_button_1").is_some());
        assert_eq!(actions.get("troubadour-load-3"), Some(&Action::LoadSave(3)));
        assert_eq!(
            actions.get("troubadour-rmsave-3"),
            Some(&Action::DeleteSave(3))
        );
        assert_eq!(actions.len(), 3);
    }

    #[test]
    fn save_names_are_escaped() {
        let mut out = Presenter::new(MemorySink::new());
        let mut actions = Actions::default();
        let rows = [SaveRow {
            id: 0,
            name: "<b>".into(),
            date: "2024-01-01 10:00".into(),
        }];
        render_saves_table(&rows, &mut out, &mut actions);
        assert!(out.sink().region(region::SAVES_TABLE).contains("&lt;b&gt;"));
    }

    #[test]
    fn inputs_serialize_with_kind_tag() {
        let json = serde_json::to_value(Input::button("Go", "go")).unwrap();
        assert_eq!(json["kind"], "button");
        assert_eq!(json["method"], "go");
    }
}
