mod upload_slot;
