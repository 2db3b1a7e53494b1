use common::form::ImageUpload;
use common::list::Response;
use common::model::{Entity, RecordId};

pub enum Msg<E: Entity> {
    Load,
    /// A backend round trip came back.
    Completed(Response<E>),

    SetSearch(String),
    SetStatusFilter(String),
    SetClassTypeFilter(String),
    ClearFilters,
    SortBy(E::Field),

    OpenAdd,
    OpenEdit(RecordId),
    CloseForm,
    KeepEditing,
    SetField(&'static str, String),
    PickImage(&'static str, web_sys::File),
    ImageRead(&'static str, ImageUpload),
    ClearImage(&'static str),
    Submit,

    ShowDetail(RecordId),
    CloseDetail,

    AskRemove(RecordId),
    CancelRemove,
    ConfirmRemove,

    SetStatus(RecordId, String),
}
