use typst::Library;
use typst::LibraryExt;
use typst::World;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source, VirtualPath};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst_kit::fonts::{FontSearcher, FontSlot};

use crate::config::RendererConfig;

/// Virtual path under which the stylesheet reads the input document.
pub(crate) const INPUT_PATH: &str = "/input.xml";

/// One engine session: the bundled stylesheet as the main source and the
/// input XML as the only other file in the world.
///
/// Constructed per invocation; nothing here outlives the conversion call.
pub struct ConversionWorld {
    library: LazyHash<Library>,
    book: LazyHash<FontBook>,
    fonts: Vec<FontSlot>,
    main: Source,
    input_id: FileId,
    input: Bytes,
}

impl ConversionWorld {
    pub fn new(stylesheet: &str, xml: &[u8], config: &RendererConfig) -> Self {
        let fonts = FontSearcher::new()
            .include_system_fonts(config.fonts.include_system_fonts)
            .search();

        let main_id = FileId::new(None, VirtualPath::new("/stylesheet.typ"));
        let input_id = FileId::new(None, VirtualPath::new(INPUT_PATH));

        Self {
            library: LazyHash::new(Library::default()),
            book: LazyHash::new(fonts.book),
            fonts: fonts.fonts,
            main: Source::new(main_id, stylesheet.to_string()),
            input_id,
            input: Bytes::new(xml.to_vec()),
        }
    }
}

impl World for ConversionWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(
                id.vpath().as_rooted_path().to_path_buf(),
            ))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        if id == self.input_id {
            Ok(self.input.clone())
        } else {
            Err(FileError::NotFound(
                id.vpath().as_rooted_path().to_path_buf(),
            ))
        }
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index)?.get()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        None
    }
}
