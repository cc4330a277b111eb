use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4" role="dialog" aria-modal="true">
            <div class="relative max-h-[90vh] w-full max-w-lg overflow-y-auto rounded-2xl bg-white p-6 shadow-2xl dark:bg-slate-900">
                <button
                    type="button"
                    class="absolute right-4 top-4 text-slate-400 hover:text-slate-700 dark:hover:text-slate-200"
                    aria-label="Close"
                    onclick={close}
                >
                    <i class="fas fa-xmark fa-lg" aria-hidden="true"></i>
                </button>
                <h2 class="mb-5 text-xl font-semibold">{ props.title.clone() }</h2>
                { props.children.clone() }
            </div>
        </div>
    }
}
