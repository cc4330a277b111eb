use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_CLASSES: &str = "w-full rounded-lg border border-slate-300 bg-white px-3 py-2 text-sm \
                             focus:border-violet-500 focus:outline-none dark:border-slate-700 \
                             dark:bg-slate-800";

/// What an input holds. Decides the rendered `type`, `step` and
/// `inputmode`; links stay plain text so the browser never blocks a save on
/// URL syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Tel,
    Link,
    Integer,
    Decimal,
}

impl InputKind {
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::Link => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Tel => "tel",
            InputKind::Integer | InputKind::Decimal => "number",
        }
    }

    pub fn step(self) -> Option<&'static str> {
        match self {
            InputKind::Integer => Some("1"),
            InputKind::Decimal => Some("any"),
            _ => None,
        }
    }

    pub fn input_mode(self) -> Option<&'static str> {
        match self {
            InputKind::Link => Some("url"),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(InputKind::Text)]
    pub kind: InputKind,
    #[prop_or(false)]
    pub required: bool,
    #[prop_or(false)]
    pub multiline: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    /// Extra line under the input, e.g. a validity hint.
    #[prop_or_default]
    pub hint: Option<Html>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let input = if props.multiline {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                on_change.emit(target.value());
            }
        });
        html! {
            <textarea
                id={props.id.clone()}
                class={INPUT_CLASSES}
                rows="3"
                value={props.value.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        }
    } else {
        let on_change = props.on_change.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(target.value());
            }
        });
        html! {
            <input
                id={props.id.clone()}
                type={props.kind.html_type()}
                step={props.kind.step()}
                inputmode={props.kind.input_mode()}
                class={INPUT_CLASSES}
                value={props.value.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        }
    };

    html! {
        <div class="space-y-1">
            <label for={props.id.clone()} class="block text-sm font-medium">{ props.label.clone() }</label>
            { input }
            if let Some(hint) = props.hint.clone() {
                { hint }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    /// `(value, label)` pairs.
    pub options: Vec<(String, String)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(false)]
    pub required: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                on_change.emit(target.value());
            }
        })
    };

    html! {
        <div class="space-y-1">
            <label for={props.id.clone()} class="block text-sm font-medium">{ props.label.clone() }</label>
            <select id={props.id.clone()} class={INPUT_CLASSES} required={props.required} {onchange}>
                if let Some(placeholder) = props.placeholder.clone() {
                    <option value="" selected={props.value.is_empty()}>{ placeholder }</option>
                }
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{ label.clone() }</option>
                }) }
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_never_validated_as_urls() {
        assert_eq!(InputKind::Link.html_type(), "text");
        assert_eq!(InputKind::Link.input_mode(), Some("url"));
        assert_eq!(InputKind::Link.step(), None);
    }

    #[test]
    fn decimals_accept_fractions() {
        assert_eq!(InputKind::Decimal.html_type(), "number");
        assert_eq!(InputKind::Decimal.step(), Some("any"));
        assert_eq!(InputKind::Integer.step(), Some("1"));
        assert_eq!(InputKind::Text.step(), None);
    }
}
