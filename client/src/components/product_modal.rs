//! Shared create/edit/delete dialog for products.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dialog renders whatever `ProductModal` variant is current. Form inputs
//! write straight into the variant's draft; nothing reaches the product list
//! until confirm hands a `ProductAction` to the page, which runs the backend
//! call and re-fetches.

use leptos::prelude::*;

use crate::net::api::HttpBackend;
use crate::state::modal::{DraftField, ModalKind, ProductAction, ProductDraft, ProductModal};
use crate::state::session::SessionState;

/// Modal dialog bound to the page's `ProductModal` signal.
#[component]
pub fn ProductModalDialog(modal: RwSignal<ProductModal>, on_confirm: Callback<ProductAction>) -> impl IntoView {
    // Memos keep typing in the draft from re-rendering the whole dialog.
    let is_open = Memo::new(move |_| modal.with(ProductModal::is_open));
    let kind = Memo::new(move |_| modal.with(ProductModal::kind));

    let close = move || modal.update(ProductModal::close);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    });
    let on_submit = move |_| {
        let mut action = None;
        modal.update(|m| action = m.confirm());
        if let Some(action) = action {
            on_confirm.run(action);
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class=move || format!("dialog product-modal {}", kind.get().size_class())
                    role="dialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                >
                    <div class=move || format!("product-modal__header {}", kind.get().header_class())>
                        <h2 class="product-modal__title">{move || kind.get().title()}</h2>
                        <button class="product-modal__close" aria-label="Close" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>
                    <div class="product-modal__body">
                        {move || match kind.get() {
                            ModalKind::Delete => view! { <DeleteBody modal/> }.into_any(),
                            ModalKind::Create | ModalKind::Edit => view! { <DraftForm modal/> }.into_any(),
                        }}
                    </div>
                    <div class="product-modal__footer">
                        <button class="btn btn--outline" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class=move || kind.get().confirm_class() on:click=on_submit>
                            {move || kind.get().confirm_label()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn edit_draft(modal: RwSignal<ProductModal>, f: impl FnOnce(&mut ProductDraft)) {
    modal.update(|m| {
        if let Some(draft) = m.draft_mut() {
            f(draft);
        }
    });
}

fn draft_value(modal: RwSignal<ProductModal>, field: DraftField) -> Memo<String> {
    Memo::new(move |_| {
        modal.with(|m| {
            m.draft()
                .map(|draft| field.read(draft.product()))
                .unwrap_or_default()
        })
    })
}

#[component]
fn DeleteBody(modal: RwSignal<ProductModal>) -> impl IntoView {
    let title = move || {
        modal.with(|m| {
            m.subject()
                .map(|product| product.title.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <p>
            "Delete " <strong class="product-modal__danger-text">{title}</strong>
            "? This cannot be undone."
        </p>
    }
}

#[component]
fn DraftForm(modal: RwSignal<ProductModal>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = StoredValue::new(expect_context::<HttpBackend>());

    let image_url = draft_value(modal, DraftField::ImageUrl);
    let has_image = move || !image_url.get().is_empty();
    let enabled = Memo::new(move |_| modal.with(|m| m.draft().is_some_and(|d| d.product().is_enabled)));
    let image_count = Memo::new(move |_| modal.with(|m| m.draft().map_or(0, |d| d.images().len())));

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::net::api::ImageUpload;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            let Some(token) = session.with_untracked(|s| s.credential().map(str::to_owned)) else {
                log::warn!("image upload skipped: not signed in");
                return;
            };
            let Some(key) = modal.with_untracked(ProductModal::draft_key) else {
                return;
            };
            let backend = backend.get_value();
            leptos::task::spawn_local(async move {
                let result = backend.upload_image(&token, &file).await;
                modal.update(|m| m.apply_upload_to(&key, result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, session, backend);
        }
    };

    view! {
        <div class="product-form">
            <div class="product-form__images">
                <DraftInput modal field=DraftField::ImageUrl label="Primary image URL"/>
                <div class="form-field">
                    <label class="form-field__label" for="fileInput">"Or upload an image"</label>
                    <input
                        id="fileInput"
                        class="form-field__input"
                        type="file"
                        accept=".jpg,.jpeg,.png"
                        on:change=on_file
                    />
                </div>
                <Show when=has_image>
                    <img class="product-form__preview" src=move || image_url.get() alt="Primary image"/>
                </Show>

                <h4>"More images"</h4>
                <For each=move || 0..image_count.get() key=|index| *index children=move |index| view! { <ImageSlot modal index/> }/>
                <button
                    class="btn btn--small btn--outline"
                    on:click=move |_| {
                        edit_draft(modal, |draft| {
                            draft.append_image();
                        });
                    }
                >
                    "Add image"
                </button>
            </div>

            <div class="product-form__fields">
                <DraftInput modal field=DraftField::Title label="Title"/>
                <div class="product-form__row">
                    <DraftInput modal field=DraftField::Category label="Category"/>
                    <DraftInput modal field=DraftField::Unit label="Unit"/>
                </div>
                <div class="product-form__row">
                    <DraftInput modal field=DraftField::OriginPrice label="Original price" input_type="number"/>
                    <DraftInput modal field=DraftField::Price label="Price" input_type="number"/>
                </div>
                <DraftTextArea modal field=DraftField::Description label="Description"/>
                <DraftTextArea modal field=DraftField::Content label="Content"/>
                <div class="form-field form-field--check">
                    <input
                        id="is_enabled"
                        type="checkbox"
                        prop:checked=move || enabled.get()
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            edit_draft(modal, |draft| draft.set_enabled(checked));
                        }
                    />
                    <label for="is_enabled">"Enabled"</label>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DraftInput(
    modal: RwSignal<ProductModal>,
    field: DraftField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = draft_value(modal, field);

    view! {
        <div class="form-field">
            <label class="form-field__label" for=field.input_id()>{label}</label>
            <input
                id=field.input_id()
                class="form-field__input"
                type=input_type
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    edit_draft(modal, |draft| draft.set_field(field, &raw));
                }
            />
        </div>
    }
}

#[component]
fn DraftTextArea(modal: RwSignal<ProductModal>, field: DraftField, label: &'static str) -> impl IntoView {
    let value = draft_value(modal, field);

    view! {
        <div class="form-field">
            <label class="form-field__label" for=field.input_id()>{label}</label>
            <textarea
                id=field.input_id()
                class="form-field__input form-field__input--area"
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    edit_draft(modal, |draft| draft.set_field(field, &raw));
                }
            ></textarea>
        </div>
    }
}

/// One secondary-image row: URL input, preview, remove button.
#[component]
fn ImageSlot(modal: RwSignal<ProductModal>, index: usize) -> impl IntoView {
    let value = Memo::new(move |_| {
        modal.with(|m| {
            m.draft()
                .and_then(|draft| draft.images().get(index).cloned())
                .unwrap_or_default()
        })
    });
    let has_preview = move || !value.get().is_empty();

    view! {
        <div class="image-slot">
            <input
                class="form-field__input"
                type="text"
                placeholder="Image URL"
                prop:value=move || value.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    edit_draft(modal, |draft| draft.set_image(index, &raw));
                }
            />
            <Show when=has_preview>
                <img class="image-slot__preview" src=move || value.get() alt="Secondary image"/>
            </Show>
            <button
                class="btn btn--small btn--outline-danger"
                on:click=move |_| edit_draft(modal, |draft| draft.remove_image(index))
            >
                "Remove"
            </button>
        </div>
    }
}
