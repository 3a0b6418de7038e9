pub mod create_document_request;
pub mod document_dto;
pub mod document_list_response;
pub mod document_response;
pub mod documents;
pub mod list_documents_query;
pub mod update_document_request;
