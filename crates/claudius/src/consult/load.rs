use claudius_core::consult::{
    encode_data_uri, mime_type_for_path, ConsultRequest, FileContent, ImageContent, InputKind,
    SkipReason, SkippedInput,
};
use std::io;

/// Everything read from disk for one consultation.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub request: ConsultRequest,
    pub skipped: Vec<SkippedInput>,
}

/// Read every requested file and image, skipping the ones that cannot be read.
///
/// Files are decoded as UTF-8 with invalid sequences replaced. Images are
/// embedded as data URIs. Nothing is size-limited.
pub async fn load_inputs(instruction: String, files: &[String], images: &[String]) -> LoadedInputs {
    let mut request = ConsultRequest {
        instruction,
        files_requested: !files.is_empty(),
        images_requested: !images.is_empty(),
        ..Default::default()
    };
    let mut skipped = Vec::new();

    for path in files {
        match read_file(path).await {
            Ok(file) => request.files.push(file),
            Err(reason) => skipped.push(SkippedInput {
                kind: InputKind::File,
                path: path.clone(),
                reason,
            }),
        }
    }

    for (index, path) in images.iter().enumerate() {
        match read_image(index + 1, path).await {
            Ok(image) => request.images.push(image),
            Err(reason) => skipped.push(SkippedInput {
                kind: InputKind::Image,
                path: path.clone(),
                reason,
            }),
        }
    }

    LoadedInputs { request, skipped }
}

async fn read_file(path: &str) -> Result<FileContent, SkipReason> {
    let bytes = tokio::fs::read(path).await.map_err(|e| skip_reason(&e))?;
    log::debug!("read {} bytes from file {}", bytes.len(), path);

    Ok(FileContent {
        path: path.to_string(),
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

async fn read_image(index: usize, path: &str) -> Result<ImageContent, SkipReason> {
    let bytes = tokio::fs::read(path).await.map_err(|e| skip_reason(&e))?;
    let mime_type = mime_type_for_path(path);
    log::debug!(
        "read {} bytes from image {} ({})",
        bytes.len(),
        path,
        mime_type
    );

    Ok(ImageContent {
        index,
        path: path.to_string(),
        data_uri: encode_data_uri(mime_type, &bytes),
    })
}

fn skip_reason(err: &io::Error) -> SkipReason {
    match err.kind() {
        io::ErrorKind::NotFound => SkipReason::NotFound,
        _ => SkipReason::Unreadable(err.to_string()),
    }
}
