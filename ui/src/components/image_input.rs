use base64::{Engine as _, engine::general_purpose};
use payloads::{ImageField, ImageUpload, MAX_IMAGE_SIZE};
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub value: ImageField,
    /// Receives the field with the picked file attached.
    pub on_change: Callback<ImageField>,
    /// Full URL of the stored image, for the preview before a new pick.
    #[prop_or_default]
    pub existing_url: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

/// File picker for a single image. The file is read in the browser and
/// held in the form until submit; nothing is uploaded here.
#[function_component]
pub fn ImageInput(props: &Props) -> Html {
    let read_error = use_state(|| None::<String>);

    let on_file_select = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        let read_error = read_error.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let file_size = file.size() as usize;
            if file_size > MAX_IMAGE_SIZE {
                read_error.set(Some(format!(
                    "File is too large ({:.1}MB). Maximum size is {}MB.",
                    file_size as f64 / 1_048_576.0,
                    MAX_IMAGE_SIZE / 1_048_576
                )));
                input.set_value("");
                return;
            }

            if let Err(e) = read_file(
                file,
                value.clone(),
                on_change.clone(),
                read_error.clone(),
            ) {
                tracing::error!("could not read image: {e:?}");
                read_error.set(Some("Could not read the file.".into()));
            }
        })
    };

    let preview = props
        .value
        .upload
        .as_ref()
        .map(|upload| AttrValue::from(upload.preview_url.clone()))
        .or_else(|| props.existing_url.clone());
    let error = (*read_error)
        .clone()
        .map(AttrValue::from)
        .or_else(|| props.error.clone());

    html! {
        <div>
            <label class="block text-sm font-medium text-neutral-700 mb-1">
                {&props.label}
                if props.required {
                    <span class="text-red-500">{" *"}</span>
                }
            </label>
            <div class="flex items-center gap-4">
                if let Some(url) = preview {
                    <img
                        src={url}
                        alt="Preview"
                        class="h-20 w-20 object-cover rounded-md border \
                               border-neutral-200"
                    />
                } else {
                    <div class="h-20 w-20 rounded-md border border-dashed \
                                border-neutral-300 flex items-center \
                                justify-center text-xs text-neutral-400">
                        {"No image"}
                    </div>
                }
                <div class="flex-1 min-w-0">
                    <input
                        type="file"
                        accept="image/*"
                        onchange={on_file_select}
                        disabled={props.disabled}
                        class="block w-full text-sm text-neutral-600
                               file:mr-3 file:py-2 file:px-3 file:rounded-md
                               file:border-0 file:bg-neutral-100
                               file:text-neutral-700 hover:file:bg-neutral-200"
                    />
                    if let Some(name) = props.value.display_name() {
                        <p class="mt-1 text-xs text-neutral-500 truncate">
                            {name.to_string()}
                        </p>
                    }
                </div>
            </div>
            if let Some(error) = error {
                <p class="mt-1 text-sm text-red-600">{error}</p>
            }
        </div>
    }
}

fn read_file(
    file: File,
    value: ImageField,
    on_change: Callback<ImageField>,
    read_error: UseStateHandle<Option<String>>,
) -> Result<(), JsValue> {
    let reader = FileReader::new()?;
    let reader_clone = reader.clone();
    let file_name = file.name();
    let mime_type = match file.type_() {
        mime if mime.is_empty() => "application/octet-stream".to_string(),
        mime => mime,
    };

    let onload = Closure::wrap(Box::new(move |_: Event| {
        let result = match reader_clone.result() {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("image read failed: {e:?}");
                read_error.set(Some("Could not read the file.".into()));
                return;
            }
        };
        let bytes = js_sys::Uint8Array::new(&result).to_vec();
        let preview_url = format!(
            "data:{};base64,{}",
            mime_type,
            general_purpose::STANDARD.encode(&bytes)
        );

        let mut field = value.clone();
        field.upload = Some(ImageUpload {
            file_name: file_name.clone(),
            mime_type: mime_type.clone(),
            bytes,
            preview_url,
        });
        read_error.set(None);
        on_change.emit(field);
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.read_as_array_buffer(&file)?;
    onload.forget();
    Ok(())
}
